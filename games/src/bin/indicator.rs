#![no_std]
#![no_main]

use bitdoglab::hardware::{self, Hardware, HardwareError};
use bitdoglab::pacer::FramePacer;
use bitdoglab_engine::config::{INDICATOR_FRAME_MS, STARTUP_SCREEN_MS};
use bitdoglab_engine::event::Button;
use bitdoglab_engine::indicator::Indicator;
use bitdoglab_engine::surface::Surface;
use cortex_m_rt::entry;
use log::{error, info};

#[link_section = ".boot2"]
#[used]
pub static BOOT_LOADER: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

#[entry]
fn main() -> ! {
    let mut hw = match Hardware::new() {
        Ok(hw) => hw,
        Err(err) => init_failed(err),
    };
    info!("Finished initialization");

    if let Err(err) = splash(&mut hw.display) {
        error!("splash failed: {:?}", err);
    }
    hw.delay.delay_ms(STARTUP_SCREEN_MS);

    let mut indicator = Indicator::new();
    let mut pacer = FramePacer::new();

    loop {
        let input = hw.input.sample();
        if input.edges.iter().any(|edge| edge.button == Button::B) {
            info!("Button B pressed, entering flash mode");
            hardware::reboot_to_bootloader();
        }
        if let Err(err) = indicator.frame(&input, &mut hw.display, &mut hw.leds) {
            error!("frame failed: {:?}", err);
        }
        pacer.end_frame(&mut hw.delay, INDICATOR_FRAME_MS);
    }
}

fn splash<S: Surface>(surface: &mut S) -> Result<(), S::Error> {
    surface.clear_all()?;
    surface.text("STARTING...", 30, 28)?;
    surface.present()
}

fn init_failed(err: HardwareError) -> ! {
    panic!("hardware init failed: {:?}", err)
}
