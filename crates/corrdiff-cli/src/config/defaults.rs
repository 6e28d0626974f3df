use crate::cli::InputFormat;

pub struct DefaultsConfig {
    pub timestep: f64,
    pub maxcorr: usize,
    pub field: u8,
    pub format: InputFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            timestep: 1.0,
            maxcorr: 1000,
            field: 1,
            format: InputFormat::Colvars,
        }
    }
}
