/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Value reported on stdout when an action was accepted by the controller.
pub const OK_MARKER: &str = "OK";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum Subsystem {
    System,
    Chassis,
    Manager,
    Event,
    Session,
    #[serde(rename = "FW")]
    #[strum(serialize = "FW")]
    Fw,
}

/// Allowed values of `ResetType` for ComputerSystem.Reset and Manager.Reset.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum ResetType {
    On,
    ForceOff,
    GracefulRestart,
    GracefulShutdown,
    PushPowerButton,
    Nmi,
}

/// Allowed values of `Boot.BootSourceOverrideTarget` for a one-time boot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
pub enum BootTarget {
    None,
    Pxe,
    Floppy,
    Cd,
    Hdd,
    BiosSetup,
    Utilities,
    UefiTarget,
    #[serde(rename = "SDCard")]
    #[strum(serialize = "SDCard")]
    SdCard,
    UefiHttp,
}

/// Optional inputs a command may need. Which one is required depends on the command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationParams {
    /// NIC name, e.g. `NIC.Integrated.1-1-1`
    pub eth_interface: Option<String>,
    /// e.g. `RAID.Slot.1-1`
    pub storage_controller: Option<String>,
    /// CPU socket label, e.g. `CPU1`
    pub cpu: Option<String>,
    /// e.g. `Fan.Embedded.A1`
    pub fan: Option<String>,
    pub reset_type: Option<ResetType>,
    pub boot_target: Option<BootTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    pub subsystem: Subsystem,
    pub command: String,
    pub params: OperationParams,
}

impl OperationRequest {
    pub fn new(subsystem: Subsystem, command: impl Into<String>) -> Self {
        OperationRequest {
            subsystem,
            command: command.into(),
            params: OperationParams::default(),
        }
    }

    pub fn with_params(mut self, params: OperationParams) -> Self {
        self.params = params;
        self
    }
}

/// Outcome of one resolver operation.
///
/// Reads end up as either `Value` or `VendorError`, so a read can never carry
/// both a value and an error message, nor neither. Writes end up as `Accepted`
/// when the controller answered with the expected status code and as
/// `Rejected` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedResult {
    Value(String),
    VendorError(String),
    Accepted { status: StatusCode },
    Rejected { status: StatusCode, message: String },
}

impl NormalizedResult {
    /// Verdict for a write given the observed and the expected status code.
    pub fn action(status: StatusCode, expected: StatusCode, failure: &str) -> Self {
        if status == expected {
            NormalizedResult::Accepted { status }
        } else {
            NormalizedResult::Rejected {
                status,
                message: format!("{failure}. Error code:{}", status.as_u16()),
            }
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            NormalizedResult::Value(v) => Some(v.as_str()),
            NormalizedResult::Accepted { .. } => Some(OK_MARKER),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            NormalizedResult::VendorError(m) | NormalizedResult::Rejected { message: m, .. } => {
                Some(m.as_str())
            }
            _ => None,
        }
    }

    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            NormalizedResult::Accepted { status } | NormalizedResult::Rejected { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn changed(&self) -> bool {
        matches!(self, NormalizedResult::Accepted { .. })
    }
}

/// Record handed back to the caller after one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    pub subsystem: Subsystem,
}

impl CommandResult {
    pub fn no_op(subsystem: Subsystem) -> Self {
        CommandResult {
            changed: false,
            stdout: None,
            stderr: None,
            subsystem,
        }
    }

    // Empty values are not reported, matching what callers of the module expect.
    pub fn from_normalized(subsystem: Subsystem, result: &NormalizedResult) -> Self {
        let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);
        CommandResult {
            changed: result.changed(),
            stdout: non_empty(result.value()),
            stderr: non_empty(result.error_message()),
            subsystem,
        }
    }
}
