/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! YAML settings.
//!
//! ```yaml
//! symmetry-eps: 0.000001
//! print:
//!   precision: 2
//! ```
//!
//! Every field is optional. Unknown keys are logged as possible typos.

// NOTE: Please go through the YamlRead trait rather than calling
//       serde_yaml::from_{reader,value,etc.} directly, so that typos get reported.

use ::failure::Error;
use ::hgmatch_matrix::PrintSettings;
use ::std::io::Read;
use ::std::path::Path;

/// Alternative to `serde_yaml::from_reader` that warns about unused keys.
pub trait YamlRead: for<'de> ::serde::Deserialize<'de> {
    fn from_reader(mut r: impl Read) -> Result<Self, ::serde_yaml::Error>
    { YamlRead::from_dyn_reader(&mut r) }

    fn from_dyn_reader(r: &mut dyn Read) -> Result<Self, ::serde_yaml::Error> {
        // serde_ignored needs a Deserializer, and serde_yaml has none that reads
        // directly from a Read... but it does impl Deserializer for Value.
        Self::from_value(value_from_dyn_reader(r)?)
    }

    fn from_value(value: ::serde_yaml::Value) -> Result<Self, ::serde_yaml::Error>;
}

macro_rules! derive_yaml_read {
    ($Type:ty) => {
        impl YamlRead for $Type {
            fn from_value(value: ::serde_yaml::Value) -> Result<$Type, ::serde_yaml::Error> {
                ::serde_ignored::deserialize(
                    value,
                    |path| warn!("Unused config item (possible typo?): {}", path),
                )
            }
        }
    };
}

fn value_from_dyn_reader(r: &mut dyn Read) -> Result<::serde_yaml::Value, ::serde_yaml::Error>
{ ::serde_yaml::from_reader(r) }

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// Tolerance handed to `is_symmetric_eps` by programs that read these settings.
    #[serde(default = "_settings__symmetry_eps")]
    pub symmetry_eps: f64,

    #[serde(default)]
    pub print: Print,
}
derive_yaml_read!{Settings}

#[allow(non_snake_case)]
fn _settings__symmetry_eps() -> f64 { 1e-6 }

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Print {
    /// Digits after the decimal point in printed matrices.
    #[serde(default = "_print__precision")]
    pub precision: usize,
}

#[allow(non_snake_case)]
fn _print__precision() -> usize { PrintSettings::default().precision }

impl Default for Print {
    fn default() -> Self { Print { precision: _print__precision() } }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            symmetry_eps: _settings__symmetry_eps(),
            print: Default::default(),
        }
    }
}

impl Settings {
    /// Reads and validates a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Settings, Error> {
        let path = path.as_ref();
        let file = ::std::fs::File::open(path)
            .map_err(|e| format_err!("could not open settings file {}: {}", path.display(), e))?;
        let settings = Settings::from_reader(::std::io::BufReader::new(file))?;
        settings.validate()
    }

    pub fn validate(self) -> Result<Settings, Error> {
        if !(self.symmetry_eps >= 0.0 && self.symmetry_eps.is_finite()) {
            bail!("symmetry-eps must be a finite, non-negative number (got {})", self.symmetry_eps);
        }
        Ok(self)
    }

    pub fn print_settings(&self) -> PrintSettings {
        PrintSettings { precision: self.print.precision }
    }
}
