use core::panic::PanicInfo;
use cortex_m_rt::{exception, ExceptionFrame};
use pico::hal::pac;

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    log::error!("{}", info);
    // Keep servicing USB so the message reaches the host.
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::USBCTRL_IRQ);
    }
    #[allow(clippy::empty_loop)]
    loop {}
}

#[exception]
unsafe fn HardFault(_: &ExceptionFrame) -> ! {
    #[allow(clippy::empty_loop)]
    loop {}
}
