use crate::error::ClapError;
use rationals_config::RunOption;

pub struct ClapSession {
    pub errors: Vec<ClapError>,
    pub result: RunOption,
}

impl ClapSession {
    pub fn with_result(result: RunOption) -> Self {
        ClapSession {
            errors: vec![],
            result,
        }
    }

    pub fn with_errors(errors: Vec<ClapError>) -> Self {
        ClapSession {
            errors,
            result: RunOption::default(),
        }
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }
}
