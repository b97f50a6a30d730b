// Bridge: remotes (abstraction) and devices (implementation) vary
// independently. Any remote can drive any device.

use crate::transcript::Transcript;

pub trait Device {
    fn power_on(&self) -> String;
    fn power_off(&self) -> String;
    fn set_channel(&self, channel: u32) -> String;
}

pub struct Tv;

impl Device for Tv {
    fn power_on(&self) -> String {
        "TV is ON".to_string()
    }

    fn power_off(&self) -> String {
        "TV is OFF".to_string()
    }

    fn set_channel(&self, channel: u32) -> String {
        format!("TV channel set to {channel}")
    }
}

pub struct Radio;

impl Device for Radio {
    fn power_on(&self) -> String {
        "Radio is ON".to_string()
    }

    fn power_off(&self) -> String {
        "Radio is OFF".to_string()
    }

    fn set_channel(&self, channel: u32) -> String {
        format!("Radio channel set to {channel}")
    }
}

pub trait RemoteControl {
    fn turn_on(&self) -> Vec<String>;
    fn turn_off(&self) -> Vec<String>;
    fn set_channel(&self, channel: u32) -> Vec<String>;
}

pub struct BasicRemoteControl<'a> {
    device: &'a dyn Device,
}

impl<'a> BasicRemoteControl<'a> {
    pub fn new(device: &'a dyn Device) -> Self {
        Self { device }
    }
}

impl RemoteControl for BasicRemoteControl<'_> {
    fn turn_on(&self) -> Vec<String> {
        vec![self.device.power_on()]
    }

    fn turn_off(&self) -> Vec<String> {
        vec![self.device.power_off()]
    }

    fn set_channel(&self, channel: u32) -> Vec<String> {
        vec![self.device.set_channel(channel)]
    }
}

pub struct AdvancedRemoteControl<'a> {
    device: &'a dyn Device,
}

impl<'a> AdvancedRemoteControl<'a> {
    pub fn new(device: &'a dyn Device) -> Self {
        Self { device }
    }

    pub fn mute(&self) -> String {
        "Device is muted".to_string()
    }
}

impl RemoteControl for AdvancedRemoteControl<'_> {
    fn turn_on(&self) -> Vec<String> {
        vec![
            self.device.power_on(),
            "Performing additional setup for advanced remote".to_string(),
        ]
    }

    fn turn_off(&self) -> Vec<String> {
        vec![
            self.device.power_off(),
            "Performing additional teardown for advanced remote".to_string(),
        ]
    }

    fn set_channel(&self, channel: u32) -> Vec<String> {
        vec![
            self.device.set_channel(channel),
            "Additional channel setup for advanced remote".to_string(),
        ]
    }
}

fn drive(out: &mut Transcript, device: &dyn Device, basic_channel: u32, advanced_channel: u32) {
    let basic = BasicRemoteControl::new(device);
    out.extend(basic.turn_on());
    out.extend(basic.set_channel(basic_channel));
    out.extend(basic.turn_off());

    let advanced = AdvancedRemoteControl::new(device);
    out.extend(advanced.turn_on());
    out.extend(advanced.set_channel(advanced_channel));
    out.push(advanced.mute());
    out.extend(advanced.turn_off());
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    drive(&mut out, &Tv, 10, 20);
    drive(&mut out, &Radio, 30, 40);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remotes_work_with_any_device() {
        let remotes: [Box<dyn RemoteControl>; 2] = [
            Box::new(BasicRemoteControl::new(&Radio)),
            Box::new(AdvancedRemoteControl::new(&Radio)),
        ];
        for remote in &remotes {
            assert_eq!(remote.set_channel(7)[0], "Radio channel set to 7");
        }
    }

    #[test]
    fn test_demo_output() {
        assert_eq!(
            demo().lines(),
            [
                "TV is ON",
                "TV channel set to 10",
                "TV is OFF",
                "TV is ON",
                "Performing additional setup for advanced remote",
                "TV channel set to 20",
                "Additional channel setup for advanced remote",
                "Device is muted",
                "TV is OFF",
                "Performing additional teardown for advanced remote",
                "Radio is ON",
                "Radio channel set to 30",
                "Radio is OFF",
                "Radio is ON",
                "Performing additional setup for advanced remote",
                "Radio channel set to 40",
                "Additional channel setup for advanced remote",
                "Device is muted",
                "Radio is OFF",
                "Performing additional teardown for advanced remote",
            ]
        );
    }
}
