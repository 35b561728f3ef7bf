//! Intent labels assigned to every user utterance.

use serde::{Deserialize, Serialize};

/// What the user is asking about. Exactly one label per message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentLabel {
    /// The device misbehaves or reports an error
    DeviceTroubleshooting,
    /// Installing or setting up the device
    DeviceSetup,
    /// Diagnosis, treatment or doctor-related questions
    MedicalGuidance,
    /// General questions about OSA itself
    MedicalEducation,
    /// Questions about the SleepSense technology
    TechnologyInfo,
    /// Anything else
    #[default]
    GeneralInquiry,
}

impl IntentLabel {
    /// Every label, in classifier priority order.
    pub const ALL: [IntentLabel; 6] = [
        IntentLabel::DeviceTroubleshooting,
        IntentLabel::DeviceSetup,
        IntentLabel::MedicalGuidance,
        IntentLabel::MedicalEducation,
        IntentLabel::TechnologyInfo,
        IntentLabel::GeneralInquiry,
    ];

    /// The wire name, as it appears in prompts and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeviceTroubleshooting => "device_troubleshooting",
            Self::DeviceSetup => "device_setup",
            Self::MedicalGuidance => "medical_guidance",
            Self::MedicalEducation => "medical_education",
            Self::TechnologyInfo => "technology_info",
            Self::GeneralInquiry => "general_inquiry",
        }
    }

    /// Medical intents get a disclaimer appended to the answer.
    pub fn is_medical(&self) -> bool {
        matches!(self, Self::MedicalEducation | Self::MedicalGuidance)
    }

    /// Device intents get a technical-support note appended to the answer.
    pub fn is_device_support(&self) -> bool {
        matches!(self, Self::DeviceTroubleshooting | Self::DeviceSetup)
    }
}

impl std::fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_general_inquiry() {
        assert_eq!(IntentLabel::default(), IntentLabel::GeneralInquiry);
    }

    #[test]
    fn serde_uses_wire_names() {
        for label in IntentLabel::ALL {
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
    }

    #[test]
    fn medical_and_device_groups_are_disjoint() {
        for label in IntentLabel::ALL {
            assert!(!(label.is_medical() && label.is_device_support()));
        }
        assert!(!IntentLabel::GeneralInquiry.is_medical());
        assert!(!IntentLabel::TechnologyInfo.is_device_support());
    }
}
