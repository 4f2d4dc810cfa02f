use bitdoglab_engine::indicator::{LedChannel, LedSink};
use embedded_hal::PwmPin;
use hal::gpio::bank0::{Gpio11, Gpio12, Gpio13};
use hal::gpio::{FunctionPwm, Pin};
use hal::pwm::{FreeRunning, Pwm5, Pwm6, Slice, Slices};
use pico::hal;

/// PWM top. Brightness levels map 1:1 onto the duty cycle.
pub const PWM_TOP: u16 = 255;

/// The RGB LED. Green is on slice 5, red and blue share slice 6.
pub struct RgbLed {
    pwm5: Slice<Pwm5, FreeRunning>,
    pwm6: Slice<Pwm6, FreeRunning>,
}

impl RgbLed {
    pub fn new(
        slices: Slices,
        green_pin: Pin<Gpio11, FunctionPwm>,
        blue_pin: Pin<Gpio12, FunctionPwm>,
        red_pin: Pin<Gpio13, FunctionPwm>,
    ) -> Self {
        let mut pwm5 = slices.pwm5;
        let mut pwm6 = slices.pwm6;
        pwm5.set_top(PWM_TOP);
        pwm6.set_top(PWM_TOP);
        pwm5.enable();
        pwm6.enable();
        pwm5.channel_b.output_to(green_pin);
        pwm6.channel_a.output_to(blue_pin);
        pwm6.channel_b.output_to(red_pin);

        let mut led = RgbLed { pwm5, pwm6 };
        led.off();
        led
    }

    pub fn off(&mut self) {
        for channel in [LedChannel::Red, LedChannel::Green, LedChannel::Blue] {
            self.set_brightness(channel, 0);
        }
    }
}

impl LedSink for RgbLed {
    fn set_brightness(&mut self, channel: LedChannel, level: u8) {
        let duty = level as u16;
        match channel {
            LedChannel::Red => self.pwm6.channel_b.set_duty(duty),
            LedChannel::Green => self.pwm5.channel_b.set_duty(duty),
            LedChannel::Blue => self.pwm6.channel_a.set_duty(duty),
        }
    }
}
