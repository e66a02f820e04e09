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
use serde_json::json;

use super::Command;
use crate::{IdracError, IdracResult, OperationParams};

/// Where a command lives, how it is called and how its answer is flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    Read {
        path: ResourcePath,
        extract: Extract,
    },
    Action(Action),
}

impl Route {
    pub const fn read(path: ResourcePath, extract: Extract) -> Route {
        Route::Read { path, extract }
    }

    /// Single field of the subsystem root resource.
    pub const fn root_field(pointer: &'static str) -> Route {
        Route::Read {
            path: ResourcePath::Root,
            extract: Extract::Field(pointer),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Action {
    pub verb: Verb,
    pub path: ResourcePath,
    pub payload: Payload,
    pub expect: StatusCode,
    pub failure: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    Post,
    Patch,
}

/// Path below the subsystem root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResourcePath {
    Root,
    Fixed(&'static str),
    Param {
        prefix: &'static str,
        param: Param,
        suffix: &'static str,
    },
}

impl ResourcePath {
    pub fn resolve(
        self,
        base: &str,
        command: Command,
        params: &OperationParams,
    ) -> IdracResult<String> {
        match self {
            ResourcePath::Root => Ok(base.to_string()),
            ResourcePath::Fixed(path) => Ok(format!("{base}{path}")),
            ResourcePath::Param {
                prefix,
                param,
                suffix,
            } => {
                let value = param.require(command, params)?;
                Ok(format!("{base}{prefix}{value}{suffix}"))
            }
        }
    }
}

/// Caller supplied path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Param {
    EthInterface,
    StorageController,
    Cpu,
    Fan,
}

impl Param {
    pub fn name(self) -> &'static str {
        match self {
            Param::EthInterface => "eth_interface",
            Param::StorageController => "storage_controller",
            Param::Cpu => "CPU",
            Param::Fan => "FAN",
        }
    }

    fn require(self, command: Command, params: &OperationParams) -> IdracResult<&str> {
        let value = match self {
            Param::EthInterface => params.eth_interface.as_deref(),
            Param::StorageController => params.storage_controller.as_deref(),
            Param::Cpu => params.cpu.as_deref(),
            Param::Fan => params.fan.as_deref(),
        };
        value
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| missing(command, self.name()))
    }
}

/// Body template of a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Payload {
    ResetType,
    BootOverride,
}

impl Payload {
    pub fn build(
        self,
        command: Command,
        params: &OperationParams,
    ) -> IdracResult<serde_json::Value> {
        match self {
            Payload::ResetType => {
                let reset_type = params
                    .reset_type
                    .ok_or_else(|| missing(command, "ResetType"))?;
                Ok(json!({ "ResetType": reset_type }))
            }
            Payload::BootOverride => {
                let target = params
                    .boot_target
                    .ok_or_else(|| missing(command, "Target"))?;
                Ok(json!({ "Boot": { "BootSourceOverrideTarget": target } }))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Join {
    Comma,
    Json,
}

impl Join {
    pub fn apply(self, items: &[String]) -> String {
        match self {
            Join::Comma => crate::normalize::join_comma(items),
            Join::Json => crate::normalize::join_json(items),
        }
    }
}

/// Flattening rule applied to the success shape of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extract {
    /// One value at a JSON pointer.
    Field(&'static str),
    /// Basenames of the collection members.
    Members(Join),
    /// Basenames of a link array, optionally keeping only what follows `after`.
    Links {
        pointer: &'static str,
        after: Option<&'static str>,
    },
    /// Names listed in `Attributes.UefiBootSeq`, comma-joined.
    BootSequence,
    /// `CPU<n>` labels built from processor member ids such as `CPU.Socket.1`.
    ProcessorLabels,
    /// `Devices` of a storage controller.
    Devices,
    /// Name to version map over every firmware inventory member.
    FirmwareInventory,
}

fn missing(command: Command, parameter: &'static str) -> IdracError {
    IdracError::MissingParameter {
        command: command.to_string(),
        parameter,
    }
}
