// Builder: a Director drives a ComputerBuilder step by step; each concrete
// builder decides what the parts actually are.

use crate::transcript::Transcript;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Computer {
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
}

impl Computer {
    /// Lists the installed parts. Parts that were never set are left out.
    pub fn display_specs(&self) -> Vec<String> {
        let parts: Vec<String> = [
            ("CPU", &self.cpu),
            ("GPU", &self.gpu),
            ("RAM", &self.ram),
            ("Storage", &self.storage),
        ]
        .into_iter()
        .filter_map(|(label, part)| part.as_ref().map(|value| format!("{label}: {value}")))
        .collect();

        let last = parts.len().saturating_sub(1);
        let mut lines = vec!["Computer Specifications:".to_string()];
        lines.extend(parts.into_iter().enumerate().map(|(i, part)| {
            if i < last {
                format!("{part},")
            } else {
                part
            }
        }));
        lines
    }
}

pub trait ComputerBuilder {
    fn set_cpu(&mut self);
    fn set_gpu(&mut self);
    fn set_ram(&mut self);
    fn set_storage(&mut self);

    /// Hands over the assembled computer and leaves the builder empty.
    fn build(&mut self) -> Computer;
}

#[derive(Default)]
pub struct GamingComputerBuilder {
    computer: Computer,
}

impl GamingComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComputerBuilder for GamingComputerBuilder {
    fn set_cpu(&mut self) {
        self.computer.cpu = Some("High-end Gaming CPU".to_string());
    }

    fn set_gpu(&mut self) {
        self.computer.gpu = Some("High-end Gaming GPU".to_string());
    }

    fn set_ram(&mut self) {
        self.computer.ram = Some("32GB".to_string());
    }

    fn set_storage(&mut self) {
        self.computer.storage = Some("1TB SSD".to_string());
    }

    fn build(&mut self) -> Computer {
        std::mem::take(&mut self.computer)
    }
}

#[derive(Default)]
pub struct OfficeComputerBuilder {
    computer: Computer,
}

impl OfficeComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComputerBuilder for OfficeComputerBuilder {
    fn set_cpu(&mut self) {
        self.computer.cpu = Some("Mid-range Office CPU".to_string());
    }

    fn set_gpu(&mut self) {
        self.computer.gpu = Some("Integrated GPU".to_string());
    }

    fn set_ram(&mut self) {
        self.computer.ram = Some("16GB".to_string());
    }

    fn set_storage(&mut self) {
        self.computer.storage = Some("512GB SSD".to_string());
    }

    fn build(&mut self) -> Computer {
        std::mem::take(&mut self.computer)
    }
}

/// Knows the construction recipes, not the parts.
pub struct Director;

impl Director {
    pub fn build_basic_computer(&self, builder: &mut dyn ComputerBuilder) {
        builder.set_cpu();
        builder.set_ram();
        builder.set_storage();
    }

    pub fn build_full_featured_computer(&self, builder: &mut dyn ComputerBuilder) {
        builder.set_cpu();
        builder.set_gpu();
        builder.set_ram();
        builder.set_storage();
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    let director = Director;

    let mut gaming = GamingComputerBuilder::new();
    director.build_full_featured_computer(&mut gaming);
    out.extend(gaming.build().display_specs());

    let mut office = OfficeComputerBuilder::new();
    director.build_basic_computer(&mut office);
    out.extend(office.build().display_specs());
    out
}
