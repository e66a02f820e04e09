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

use super::route::{Action, Extract, Join, Payload, ResourcePath, Route, Verb};

/// Commands against the iDRAC itself, `/redfish/v1/Managers/iDRAC.Embedded.1`.
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
pub enum ManagerCommand {
    Health,
    ResetOptions,
    CommandShells,
    EthernetInterfaces,
    FirmwareVersion,
    GraphicalConsole,
    #[strum(serialize = "SELLogs")]
    SelLogs,
    #[strum(serialize = "LCLogs")]
    LcLogs,
    Jobs,
    HostName,
    Reset,
}

impl ManagerCommand {
    pub(crate) fn route(self) -> Route {
        match self {
            ManagerCommand::Health => Route::root_field("/Status/Health"),
            ManagerCommand::ResetOptions => Route::root_field(
                "/Actions/#Manager.Reset/ResetType@Redfish.AllowableValues",
            ),
            ManagerCommand::CommandShells => {
                Route::root_field("/CommandShell/ConnectTypesSupported")
            }
            ManagerCommand::EthernetInterfaces => Route::read(
                ResourcePath::Fixed("/EthernetInterfaces"),
                Extract::Members(Join::Comma),
            ),
            ManagerCommand::FirmwareVersion => Route::root_field("/FirmwareVersion"),
            ManagerCommand::GraphicalConsole => {
                Route::root_field("/GraphicalConsole/ConnectTypesSupported")
            }
            ManagerCommand::SelLogs => {
                Route::read(ResourcePath::Fixed("/Logs/Sel"), Extract::Field("/Members"))
            }
            ManagerCommand::LcLogs => Route::read(
                ResourcePath::Fixed("/Logs/Lclog"),
                Extract::Field("/Members"),
            ),
            ManagerCommand::Jobs => Route::read(
                ResourcePath::Fixed("/Jobs"),
                Extract::Members(Join::Comma),
            ),
            ManagerCommand::HostName => Route::read(
                ResourcePath::Fixed("/NetworkProtocol"),
                Extract::Field("/HostName"),
            ),
            ManagerCommand::Reset => Route::Action(Action {
                verb: Verb::Post,
                path: ResourcePath::Fixed("/Actions/Manager.Reset"),
                payload: Payload::ResetType,
                expect: StatusCode::NO_CONTENT,
                failure: "Manager reset failed",
            }),
        }
    }
}
