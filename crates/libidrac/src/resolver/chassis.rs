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

use super::route::{Extract, Param, ResourcePath, Route};

// Sensor ids are `<controller>#<sensor>`, the `#` has to travel percent-encoded.
macro_rules! temperature_sensor {
    ($sensor:literal) => {
        concat!("/Sensors/Temperatures/iDRAC.Embedded.1%23", $sensor)
    };
}

const TEMPERATURES: &str = temperature_sensor!("");

/// Commands against `/redfish/v1/Chassis/System.Embedded.1`.
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
pub enum ChassisCommand {
    Health,
    #[strum(serialize = "IndicatorLED")]
    IndicatorLed,
    ChassisType,
    ResetTypes,
    CooledBy,
    PoweredBy,
    PartNumber,
    Model,
    Manufacturer,
    PowerState,
    SerialNumber,
    #[strum(serialize = "SKU")]
    Sku,
    BoardInletTemp,
    BoardExhaustTemp,
    #[strum(serialize = "CPUTemp")]
    CpuTemp,
    PowerConsumedWatts,
    #[strum(serialize = "FANRPM")]
    FanRpm,
}

impl ChassisCommand {
    pub(crate) fn route(self) -> Route {
        match self {
            ChassisCommand::Health => Route::root_field("/Status/Health"),
            ChassisCommand::IndicatorLed => Route::root_field("/IndicatorLED"),
            ChassisCommand::ChassisType => Route::root_field("/ChassisType"),
            ChassisCommand::ResetTypes => Route::root_field(
                "/Actions/#Chassis.Reset/ResetType@Redfish.AllowableValues",
            ),
            // Fan links look like `.../Sensors/Fans/0x17||Fan.Embedded.1A`.
            ChassisCommand::CooledBy => Route::read(
                ResourcePath::Root,
                Extract::Links {
                    pointer: "/Links/CooledBy",
                    after: Some("||"),
                },
            ),
            ChassisCommand::PoweredBy => Route::read(
                ResourcePath::Root,
                Extract::Links {
                    pointer: "/Links/PoweredBy",
                    after: None,
                },
            ),
            ChassisCommand::PartNumber => Route::root_field("/PartNumber"),
            ChassisCommand::Model => Route::root_field("/Model"),
            ChassisCommand::Manufacturer => Route::root_field("/Manufacturer"),
            ChassisCommand::PowerState => Route::root_field("/PowerState"),
            ChassisCommand::SerialNumber => Route::root_field("/SerialNumber"),
            ChassisCommand::Sku => Route::root_field("/SKU"),
            ChassisCommand::BoardInletTemp => Route::read(
                ResourcePath::Fixed(temperature_sensor!("SystemBoardInletTemp")),
                Extract::Field("/ReadingCelsius"),
            ),
            ChassisCommand::BoardExhaustTemp => Route::read(
                ResourcePath::Fixed(temperature_sensor!("SystemBoardExhaustTemp")),
                Extract::Field("/ReadingCelsius"),
            ),
            ChassisCommand::CpuTemp => Route::read(
                ResourcePath::Param {
                    prefix: TEMPERATURES,
                    param: Param::Cpu,
                    suffix: "Temp",
                },
                Extract::Field("/ReadingCelsius"),
            ),
            ChassisCommand::PowerConsumedWatts => Route::read(
                ResourcePath::Fixed("/Power/PowerControl"),
                Extract::Field("/PowerConsumedWatts"),
            ),
            ChassisCommand::FanRpm => Route::read(
                ResourcePath::Param {
                    prefix: "/Sensors/Fans/0x17||",
                    param: Param::Fan,
                    suffix: "",
                },
                Extract::Field("/Reading"),
            ),
        }
    }
}
