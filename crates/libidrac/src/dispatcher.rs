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

use tracing::{debug, instrument, warn};

use crate::resolver::{Command, Resolver};
use crate::{
    CommandResult, IdracError, IdracResult, NormalizedResult, OperationRequest, ResourceRoots,
    Transport,
};

/// Routes one [`OperationRequest`] to its resolver operation.
///
/// A dispatcher serves a single invocation, `dispatch` consumes it.
#[derive(Debug)]
pub struct Dispatcher<T> {
    transport: T,
    roots: ResourceRoots,
    strict: bool,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T, roots: ResourceRoots) -> Self {
        Dispatcher {
            transport,
            roots,
            strict: false,
        }
    }

    /// Unknown commands become [`IdracError::UnsupportedCommand`] instead of a no-op.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[instrument(skip_all, fields(subsystem = %request.subsystem, command = %request.command))]
    pub async fn dispatch(self, request: &OperationRequest) -> IdracResult<CommandResult> {
        let Some(command) = Command::parse(request.subsystem, &request.command) else {
            if self.strict {
                return Err(IdracError::UnsupportedCommand {
                    subsystem: request.subsystem,
                    command: request.command.clone(),
                });
            }
            warn!("unrecognized command, nothing to do");
            return Ok(CommandResult::no_op(request.subsystem));
        };

        let resolver = Resolver::new(&self.transport, &self.roots);
        let result = resolver.resolve(command, &request.params).await?;
        if let NormalizedResult::VendorError(message) = &result {
            debug!(%message, "controller answered with an error envelope");
        }
        Ok(CommandResult::from_normalized(request.subsystem, &result))
    }
}
