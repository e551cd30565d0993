//! The controller commands the driver issues.

use pn532_protocol::{CMD_IN_LIST_PASSIVE_TARGET, CMD_SAM_CONFIGURATION, HOST_TO_PN532};

/// SAM operating mode: normal, the SAM is bypassed.
const SAM_MODE_NORMAL: u8 = 0x01;
/// Enumerate at most one target.
const MAX_TARGETS: u8 = 0x01;
/// Baud/modulation selector: 106 kbps ISO14443 type A.
const BAUD_106K_TYPE_A: u8 = 0x00;

/// Commands that can be sent to the controller.
///
/// The tag-scan workflow only ever issues these two; both payloads are
/// fixed and start with the host-to-controller direction byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Put the secure access module in normal mode. Required once before
    /// target discovery; the response carries no data of interest.
    SamConfiguration,

    /// Discover passive targets in the RF field, reporting at most one.
    ListPassiveTarget,
}

impl Command {
    /// The command payload as it appears inside an information frame.
    pub fn payload(&self) -> &'static [u8] {
        match self {
            Command::SamConfiguration => {
                &[HOST_TO_PN532, CMD_SAM_CONFIGURATION, SAM_MODE_NORMAL]
            }
            Command::ListPassiveTarget => &[
                HOST_TO_PN532,
                CMD_IN_LIST_PASSIVE_TARGET,
                MAX_TARGETS,
                BAUD_106K_TYPE_A,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sam_configuration_payload() {
        assert_eq!(Command::SamConfiguration.payload(), &[0xD4, 0x14, 0x01]);
    }

    #[test]
    fn test_list_passive_target_payload() {
        assert_eq!(
            Command::ListPassiveTarget.payload(),
            &[0xD4, 0x4A, 0x01, 0x00]
        );
    }
}
