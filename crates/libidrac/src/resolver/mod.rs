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

//! Per-subsystem command tables and the executor that runs them.
//!
//! Every command maps to a static [`Route`]. Reads fetch one resource and
//! flatten it through an [`Extract`] rule, writes send a templated payload
//! and judge the status code.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

use crate::normalize::{Document, coerce, join_json, try_extract, vendor_error_message};
use crate::{
    IdracError, IdracResult, NormalizedResult, OperationParams, ResourceRoots, Subsystem,
    Transport,
};

mod chassis;
mod event;
mod firmware;
mod manager;
pub(crate) mod route;
mod session;
mod system;

pub use chassis::ChassisCommand;
pub use event::EventCommand;
pub use firmware::FirmwareCommand;
pub use manager::ManagerCommand;
pub use session::SessionCommand;
pub use system::SystemCommand;

use route::{Action, Extract, Route, Verb};

/// A command paired with the subsystem it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    System(SystemCommand),
    Chassis(ChassisCommand),
    Manager(ManagerCommand),
    Event(EventCommand),
    Session(SessionCommand),
    Firmware(FirmwareCommand),
}

impl Command {
    /// Looks up `name` in the command table of `subsystem`. Names are case sensitive.
    pub fn parse(subsystem: Subsystem, name: &str) -> Option<Command> {
        match subsystem {
            Subsystem::System => SystemCommand::from_str(name).ok().map(Command::System),
            Subsystem::Chassis => ChassisCommand::from_str(name).ok().map(Command::Chassis),
            Subsystem::Manager => ManagerCommand::from_str(name).ok().map(Command::Manager),
            Subsystem::Event => EventCommand::from_str(name).ok().map(Command::Event),
            Subsystem::Session => SessionCommand::from_str(name).ok().map(Command::Session),
            Subsystem::Fw => FirmwareCommand::from_str(name).ok().map(Command::Firmware),
        }
    }

    pub fn all(subsystem: Subsystem) -> Vec<Command> {
        match subsystem {
            Subsystem::System => SystemCommand::iter().map(Command::System).collect(),
            Subsystem::Chassis => ChassisCommand::iter().map(Command::Chassis).collect(),
            Subsystem::Manager => ManagerCommand::iter().map(Command::Manager).collect(),
            Subsystem::Event => EventCommand::iter().map(Command::Event).collect(),
            Subsystem::Session => SessionCommand::iter().map(Command::Session).collect(),
            Subsystem::Fw => FirmwareCommand::iter().map(Command::Firmware).collect(),
        }
    }

    pub fn names(subsystem: Subsystem) -> Vec<&'static str> {
        Command::all(subsystem)
            .into_iter()
            .map(Command::name)
            .collect()
    }

    pub fn subsystem(self) -> Subsystem {
        match self {
            Command::System(_) => Subsystem::System,
            Command::Chassis(_) => Subsystem::Chassis,
            Command::Manager(_) => Subsystem::Manager,
            Command::Event(_) => Subsystem::Event,
            Command::Session(_) => Subsystem::Session,
            Command::Firmware(_) => Subsystem::Fw,
        }
    }

    /// Wire name, as accepted by [`Command::parse`].
    pub fn name(self) -> &'static str {
        match self {
            Command::System(c) => c.into(),
            Command::Chassis(c) => c.into(),
            Command::Manager(c) => c.into(),
            Command::Event(c) => c.into(),
            Command::Session(c) => c.into(),
            Command::Firmware(c) => c.into(),
        }
    }

    /// True for commands that change state on the controller.
    pub fn is_action(self) -> bool {
        matches!(self.route(), Route::Action(_))
    }

    pub(crate) fn route(self) -> Route {
        match self {
            Command::System(c) => c.route(),
            Command::Chassis(c) => c.route(),
            Command::Manager(c) => c.route(),
            Command::Event(c) => c.route(),
            Command::Session(c) => c.route(),
            Command::Firmware(c) => c.route(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.subsystem(), self.name())
    }
}

/// Runs one command against a controller. Requests are issued one at a time.
pub(crate) struct Resolver<'a> {
    transport: &'a dyn Transport,
    roots: &'a ResourceRoots,
}

impl<'a> Resolver<'a> {
    pub fn new(transport: &'a dyn Transport, roots: &'a ResourceRoots) -> Self {
        Resolver { transport, roots }
    }

    pub async fn resolve(
        &self,
        command: Command,
        params: &OperationParams,
    ) -> IdracResult<NormalizedResult> {
        let base = self.roots.for_subsystem(command.subsystem());
        match command.route() {
            Route::Read { path, extract } => {
                let url = path.resolve(base, command, params)?;
                self.read(&url, extract).await
            }
            Route::Action(action) => self.act(command, action, base, params).await,
        }
    }

    async fn read(&self, url: &str, extract: Extract) -> IdracResult<NormalizedResult> {
        let body = self.transport.get(url).await?;
        let doc = Document::new(url, &body);
        match extract {
            Extract::FirmwareInventory => self.firmware_inventory(&doc).await,
            other => try_extract(&doc, |doc| flatten(doc, other)),
        }
    }

    async fn act(
        &self,
        command: Command,
        action: Action,
        base: &str,
        params: &OperationParams,
    ) -> IdracResult<NormalizedResult> {
        // Both are built before anything goes on the wire.
        let url = action.path.resolve(base, command, params)?;
        let payload = action.payload.build(command, params)?;

        let status = match action.verb {
            Verb::Post => self.transport.post(&url, &payload).await?,
            Verb::Patch => self.transport.patch(&url, &payload).await?,
        };

        let result = NormalizedResult::action(status, action.expect, action.failure);
        if result.changed() {
            info!(%command, %status, "action accepted");
        } else {
            warn!(%command, %status, expected = %action.expect, "action rejected");
        }
        Ok(result)
    }

    /// Name to version map over the inventory collection, one member at a time.
    async fn firmware_inventory(&self, collection: &Document<'_>) -> IdracResult<NormalizedResult> {
        if let Some(message) = vendor_error_message(collection.body) {
            return Ok(NormalizedResult::VendorError(message));
        }

        let mut versions = BTreeMap::new();
        for member in collection.member_basenames()? {
            let url = format!("{}/{member}", collection.url);
            let body = self.transport.get(&url).await?;
            let detail = Document::new(&url, &body);
            if let Some(message) = vendor_error_message(detail.body) {
                debug!(%url, "firmware member returned an error envelope");
                return Ok(NormalizedResult::VendorError(message));
            }
            let name = detail.text("/Name")?;
            let version = detail.text("/Version")?;
            versions.insert(name, version);
        }

        serde_json::to_string(&versions)
            .map(NormalizedResult::Value)
            .map_err(|source| IdracError::JsonSerializeError {
                url: collection.url.to_string(),
                object_debug: format!("{versions:?}"),
                source,
            })
    }
}

fn flatten(doc: &Document<'_>, extract: Extract) -> IdracResult<String> {
    match extract {
        Extract::Field(pointer) => doc.text(pointer),
        Extract::Members(join) => Ok(join.apply(&doc.member_basenames()?)),
        Extract::Links { pointer, after } => {
            let mut names = doc.link_basenames(pointer)?;
            if let Some(separator) = after {
                names = names
                    .into_iter()
                    .map(|name| match name.split_once(separator) {
                        Some((_, tail)) => Ok(tail.to_string()),
                        None => Err(doc.unexpected(
                            pointer,
                            format!("link '{name}' has no '{separator}' separator"),
                        )),
                    })
                    .collect::<IdracResult<_>>()?;
            }
            Ok(join_json(&names))
        }
        Extract::BootSequence => {
            let attributes = doc.field("/Attributes")?;
            if attributes.get("UefiBootSeq").is_none() {
                return Ok(String::new());
            }
            let sequence = doc.array("/Attributes/UefiBootSeq")?;
            let names = (0..sequence.len())
                .map(|idx| doc.text(&format!("/Attributes/UefiBootSeq/{idx}/Name")))
                .collect::<IdracResult<Vec<_>>>()?;
            Ok(names.join(","))
        }
        Extract::ProcessorLabels => {
            let labels = doc
                .member_basenames()?
                .into_iter()
                .map(|id| match id.split('.').nth(2) {
                    Some(socket) => Ok(format!("CPU{socket}")),
                    None => Err(doc.unexpected(
                        "/Members",
                        format!("processor id '{id}' has no socket number"),
                    )),
                })
                .collect::<IdracResult<Vec<_>>>()?;
            Ok(join_json(&labels))
        }
        Extract::Devices => match doc.body.get("Devices") {
            None => Ok(Value::Array(Vec::new()).to_string()),
            Some(devices @ Value::Array(_)) => Ok(coerce(devices)),
            Some(_) => Err(doc.unexpected("/Devices", "expected an array")),
        },
        // Needs more than one request, handled by the resolver.
        Extract::FirmwareInventory => Err(doc.unexpected(
            "/Members",
            "firmware inventory cannot be flattened from a single document",
        )),
    }
}
