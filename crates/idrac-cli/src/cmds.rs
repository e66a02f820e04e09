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

use std::process::ExitCode;

use eyre::eyre;
use libidrac::{Command, Dispatcher, IdracError, IdracHttpClient, ResourceRoots, Subsystem};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::args::Opts;

/// Printed on stdout when the invocation could not produce a [`CommandResult`].
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FailureRecord {
    pub failed: bool,
    pub msg: String,
    pub subsystem: Subsystem,
}

impl FailureRecord {
    pub fn new(subsystem: Subsystem, error: &IdracError) -> Self {
        FailureRecord {
            failed: true,
            msg: error.to_string(),
            subsystem,
        }
    }
}

pub async fn run(opts: &Opts) -> eyre::Result<ExitCode> {
    if opts.list_commands {
        println!("{}", command_listing(opts.subsystem));
        return Ok(ExitCode::SUCCESS);
    }

    let request = opts
        .request()
        .ok_or_else(|| eyre!("--subsystem and --cmd are required"))?;
    let endpoint = opts
        .endpoint()
        .ok_or_else(|| eyre!("--idrac-ip is required"))?;

    let roots = ResourceRoots::from_endpoint(&endpoint);
    let client = IdracHttpClient::builder()
        .timeout(*opts.timeout)
        .build(endpoint)?;

    tracing::debug!(subsystem = %request.subsystem, cmd = %request.command, "dispatching");
    match Dispatcher::new(client, roots)
        .strict(opts.strict)
        .dispatch(&request)
        .await
    {
        Ok(result) => {
            println!("{}", render(&result, opts.pretty)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!("{e}");
            let record = FailureRecord::new(request.subsystem, &e);
            println!("{}", render(&record, opts.pretty)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

pub fn render<T: Serialize>(record: &T, pretty: bool) -> eyre::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    Ok(rendered)
}

/// One `<subsystem>: <command>, ...` line per subsystem.
pub fn command_listing(subsystem: Option<Subsystem>) -> String {
    let subsystems: Vec<Subsystem> = match subsystem {
        Some(s) => vec![s],
        None => Subsystem::iter().collect(),
    };
    subsystems
        .into_iter()
        .map(|s| format!("{s}: {}", Command::names(s).join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}
