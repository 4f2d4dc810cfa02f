#![no_std]
#![no_main]

use bitdoglab::hardware::{Hardware, HardwareError};
use bitdoglab::pacer::FramePacer;
use bitdoglab::time;
use bitdoglab_engine::app::App;
use bitdoglab_engine::axis::AxisSource;
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

    // Mix ADC noise into the seed.
    let axes = hw.input.joystick.read_axes();
    let seed = time::time_us64() ^ (((axes.x as u64) << 16) | axes.y as u64);
    let mut app = App::new(seed);
    let mut pacer = FramePacer::new();

    loop {
        let input = hw.input.sample();
        if let Err(err) = app.frame(&input, &mut hw.display) {
            error!("frame failed: {:?}", err);
        }
        pacer.end_frame(&mut hw.delay, app.frame_interval_ms());
    }
}

fn init_failed(err: HardwareError) -> ! {
    panic!("hardware init failed: {:?}", err)
}
