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

use super::route::{Action, Extract, Join, Param, Payload, ResourcePath, Route, Verb};

/// Commands against `/redfish/v1/Systems/System.Embedded.1`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
pub enum SystemCommand {
    Health,
    SerialNumber,
    ServiceTag,
    PartNumber,
    AssetTag,
    Manufacturer,
    BiosVersion,
    SystemType,
    PowerState,
    MemoryHealth,
    #[strum(serialize = "TotalSystemMemoryGiB")]
    TotalSystemMemoryGib,
    ProcessorCount,
    ProcessorHealth,
    ProcessorModel,
    BootSources,
    EthernetInterfaces,
    #[strum(serialize = "PermanentMACAddress")]
    PermanentMacAddress,
    SecureBoot,
    SecureBootCerts,
    #[strum(serialize = "CPUs")]
    Cpus,
    StorageControllers,
    StorageControllerDisks,
    Reset,
    OneTimeBoot,
}

impl SystemCommand {
    pub(crate) fn route(self) -> Route {
        match self {
            SystemCommand::Health => Route::root_field("/Status/Health"),
            SystemCommand::SerialNumber => Route::root_field("/SerialNumber"),
            SystemCommand::ServiceTag => Route::root_field("/SKU"),
            SystemCommand::PartNumber => Route::root_field("/PartNumber"),
            SystemCommand::AssetTag => Route::root_field("/AssetTag"),
            SystemCommand::Manufacturer => Route::root_field("/Manufacturer"),
            SystemCommand::BiosVersion => Route::root_field("/BiosVersion"),
            SystemCommand::SystemType => Route::root_field("/SystemType"),
            SystemCommand::PowerState => Route::root_field("/PowerState"),
            SystemCommand::MemoryHealth => Route::root_field("/MemorySummary/Status/Health"),
            SystemCommand::TotalSystemMemoryGib => {
                Route::root_field("/MemorySummary/TotalSystemMemoryGiB")
            }
            SystemCommand::ProcessorCount => Route::root_field("/ProcessorSummary/Count"),
            SystemCommand::ProcessorHealth => Route::root_field("/ProcessorSummary/Status/Health"),
            SystemCommand::ProcessorModel => Route::root_field("/ProcessorSummary/Model"),
            SystemCommand::BootSources => {
                Route::read(ResourcePath::Fixed("/BootSources"), Extract::BootSequence)
            }
            SystemCommand::EthernetInterfaces => Route::read(
                ResourcePath::Fixed("/EthernetInterfaces"),
                Extract::Members(Join::Json),
            ),
            SystemCommand::PermanentMacAddress => Route::read(
                ResourcePath::Param {
                    prefix: "/EthernetInterfaces/",
                    param: Param::EthInterface,
                    suffix: "",
                },
                Extract::Field("/PermanentMACAddress"),
            ),
            SystemCommand::SecureBoot => Route::read(
                ResourcePath::Fixed("/SecureBoot"),
                Extract::Field("/SecureBootCurrentBoot"),
            ),
            SystemCommand::SecureBootCerts => Route::read(
                ResourcePath::Fixed("/SecureBoot/Certificates"),
                Extract::Members(Join::Comma),
            ),
            SystemCommand::Cpus => {
                Route::read(ResourcePath::Fixed("/Processors"), Extract::ProcessorLabels)
            }
            SystemCommand::StorageControllers => Route::read(
                ResourcePath::Fixed("/Storage/Controllers"),
                Extract::Members(Join::Json),
            ),
            SystemCommand::StorageControllerDisks => Route::read(
                ResourcePath::Param {
                    prefix: "/Storage/Controllers/",
                    param: Param::StorageController,
                    suffix: "",
                },
                Extract::Devices,
            ),
            SystemCommand::Reset => Route::Action(Action {
                verb: Verb::Post,
                path: ResourcePath::Fixed("/Actions/ComputerSystem.Reset"),
                payload: Payload::ResetType,
                expect: StatusCode::NO_CONTENT,
                failure: "system reset failed",
            }),
            SystemCommand::OneTimeBoot => Route::Action(Action {
                verb: Verb::Patch,
                path: ResourcePath::Root,
                payload: Payload::BootOverride,
                expect: StatusCode::OK,
                failure: "system OneTimeBoot setting failed",
            }),
        }
    }
}
