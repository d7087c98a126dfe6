//! Bridge from `validator` derive output to the domain error taxonomy.

use validator::Validate;

use crate::error::CoreError;

/// Run derive-based validation on an input DTO, mapping failures to
/// [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectData;

    #[test]
    fn empty_project_name_is_rejected() {
        let data = ProjectData {
            name: String::new(),
            time_frame: None,
            leads_goal: 5,
        };
        assert!(validate_input(&data).is_err());
    }

    #[test]
    fn negative_lead_goal_is_rejected() {
        let data = ProjectData {
            name: "Q1 Outreach".into(),
            time_frame: None,
            leads_goal: -1,
        };
        assert!(validate_input(&data).is_err());
    }

    #[test]
    fn zero_lead_goal_is_allowed() {
        let data = ProjectData {
            name: "Q1 Outreach".into(),
            time_frame: None,
            leads_goal: 0,
        };
        assert!(validate_input(&data).is_ok());
    }
}
