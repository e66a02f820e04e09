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

use clap::Parser;
use libidrac::{
    BootTarget, DEFAULT_PASSWORD, DEFAULT_USERNAME, EndpointConfig, OperationParams,
    OperationRequest, ResetType, Subsystem,
};

#[derive(Parser, Debug)]
#[clap(
    name = "idrac",
    about = "Query and control a Dell iDRAC through its Redfish API",
    version
)]
pub struct Opts {
    #[clap(
        long,
        required_unless_present = "list_commands",
        help = "Subsystem to address: System, Chassis, Manager, Event, Session or FW"
    )]
    pub subsystem: Option<Subsystem>,

    #[clap(
        long,
        required_unless_present = "list_commands",
        help = "Command within the subsystem, see --list-commands"
    )]
    pub cmd: Option<String>,

    #[clap(long, env = "IDRAC_IP", required_unless_present = "list_commands")]
    pub idrac_ip: Option<String>,

    #[clap(long, env = "IDRAC_USER", default_value = DEFAULT_USERNAME)]
    pub idrac_user: String,

    #[clap(
        long,
        env = "IDRAC_PASSWORD",
        default_value = DEFAULT_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub idrac_password: String,

    #[clap(long, help = "Ethernet interface, for PermanentMACAddress")]
    pub eth_interface: Option<String>,

    #[clap(long, help = "Storage controller, for StorageControllerDisks")]
    pub storage_controller: Option<String>,

    #[clap(long, alias = "FAN", help = "Fan name, for FANRPM")]
    pub fan: Option<String>,

    #[clap(long, alias = "CPU", help = "CPU label such as CPU1, for CPUTemp")]
    pub cpu: Option<String>,

    #[clap(long, alias = "ResetType", help = "Reset type for System or Manager Reset")]
    pub reset_type: Option<ResetType>,

    #[clap(long, alias = "Target", help = "Boot source for System OneTimeBoot")]
    pub target: Option<BootTarget>,

    #[clap(long, default_value = "30s", help = "Per request timeout")]
    pub timeout: humantime::Duration,

    #[clap(long, help = "Fail on commands the subsystem does not know")]
    pub strict: bool,

    #[clap(long, help = "Pretty print the result record")]
    pub pretty: bool,

    #[clap(long, help = "List the commands of --subsystem, or of every subsystem")]
    pub list_commands: bool,

    #[clap(long, default_value = "warn")]
    pub log_level: String,
}

impl Opts {
    pub fn endpoint(&self) -> Option<EndpointConfig> {
        let address = self.idrac_ip.as_deref()?;
        Some(
            EndpointConfig::new(address)
                .with_credentials(self.idrac_user.as_str(), self.idrac_password.as_str()),
        )
    }

    pub fn request(&self) -> Option<OperationRequest> {
        let subsystem = self.subsystem?;
        let cmd = self.cmd.as_deref()?;
        Some(OperationRequest::new(subsystem, cmd).with_params(OperationParams {
            eth_interface: self.eth_interface.clone(),
            storage_controller: self.storage_controller.clone(),
            cpu: self.cpu.clone(),
            fan: self.fan.clone(),
            reset_type: self.reset_type,
            boot_target: self.target,
        }))
    }
}
