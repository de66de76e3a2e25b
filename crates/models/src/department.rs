use crate::validation::{FormErrors, ValidationError, required};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The department codes offered in the department selection form, in display order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum DepartmentCode {
    Acp,
    Ams,
    Ant,
    Art,
    Bcm,
    Bio,
    Bus,
    Chm,
    Chn,
    Com,
    Csc,
    Dan,
    Dat,
    Ecn,
    Edc,
    Egr,
    Ehs,
    Eng,
    Env,
    Frn,
    Fys,
    Geo,
    Grm,
    Hca,
    Hnr,
    Hst,
    Hum,
    Iph,
    Isc,
    Lib,
    Mth,
    Mus,
    Nms,
    Nur,
    Osp,
    Phl,
    Phy,
    Pol,
    Psy,
    Rel,
    Soc,
    Spn,
    The,
    Wgs,
}

impl DepartmentCode {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// All codes as strings, in select-box order
    pub fn choices() -> Vec<String> {
        Self::all().map(|code| code.to_string()).collect()
    }
}

/// Two distinct departments chosen for comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPair {
    pub first: DepartmentCode,
    pub second: DepartmentCode,
}

impl DepartmentPair {
    pub const FIRST_FIELD: &'static str = "department1";
    pub const SECOND_FIELD: &'static str = "department2";

    /// Validates the raw select values of the department form
    pub fn new(first: Option<&str>, second: Option<&str>) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();

        let first_code = Self::parse_field(first, Self::FIRST_FIELD, &mut errors);
        let second_code = Self::parse_field(second, Self::SECOND_FIELD, &mut errors);

        // Compared on the submitted values, so two identical unknown codes are flagged too
        if let (Ok(a), Ok(b)) = (required(first), required(second))
            && a == b
        {
            errors.add(Self::SECOND_FIELD, ValidationError::SameDepartment);
        }

        match (first_code, second_code) {
            (Some(first), Some(second)) if errors.is_empty() => Ok(Self { first, second }),
            _ => Err(errors),
        }
    }

    pub fn codes(&self) -> [DepartmentCode; 2] {
        [self.first, self.second]
    }

    fn parse_field(
        value: Option<&str>,
        field: &str,
        errors: &mut FormErrors,
    ) -> Option<DepartmentCode> {
        let value = match required(value) {
            Ok(value) => value,
            Err(e) => {
                errors.add(field, e);
                return None;
            }
        };

        match DepartmentCode::from_str(value) {
            Ok(code) => Some(code),
            Err(_) => {
                errors.add(field, ValidationError::InvalidChoice);
                None
            }
        }
    }
}
