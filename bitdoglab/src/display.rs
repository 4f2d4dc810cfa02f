use bitdoglab_engine::surface::Surface;
use display_interface::DisplayError;
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};
use fugit::RateExtU32;
use hal::gpio::{bank0::Gpio14, bank0::Gpio15, FunctionI2C, Pin};
use hal::pac;
use log::info;
use pico::hal;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

pub const I2C_ADDRESS: u8 = 0x3c;

pub type DisplayI2c = hal::I2C<pac::I2C1, (Pin<Gpio14, FunctionI2C>, Pin<Gpio15, FunctionI2C>)>;

pub type RealDisplay =
    Ssd1306<I2CInterface<DisplayI2c>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// The 128x64 SSD1306 OLED. Drawing goes to a RAM buffer that `present`
/// pushes over I2C.
pub struct Display {
    ssd1306: RealDisplay,
}

impl Display {
    pub fn new(
        sda_pin: Pin<Gpio14, FunctionI2C>,
        scl_pin: Pin<Gpio15, FunctionI2C>,
        i2c_device: pac::I2C1,
        resets: &mut pac::RESETS,
        system_clock: &hal::clocks::SystemClock,
    ) -> Result<Display, DisplayError> {
        info!("Initializing display");
        let i2c = hal::I2C::i2c1(
            i2c_device,
            sda_pin,
            scl_pin,
            400.kHz(),
            resets,
            system_clock,
        );
        let interface = I2CDisplayInterface::new_custom_address(i2c, I2C_ADDRESS);
        let mut ssd1306 = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        ssd1306.init()?;
        let mut display = Display { ssd1306 };
        display.clear(BinaryColor::Off)?;
        display.present()?;
        Ok(display)
    }
}

impl DrawTarget for Display {
    type Color = BinaryColor;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.ssd1306.draw_iter(pixels)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.ssd1306.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        DrawTarget::clear(&mut self.ssd1306, color)
    }
}

impl OriginDimensions for Display {
    fn size(&self) -> Size {
        self.ssd1306.size()
    }
}

impl Surface for Display {
    fn present(&mut self) -> Result<(), Self::Error> {
        self.ssd1306.flush()
    }
}
