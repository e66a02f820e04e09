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

use super::route::Route;

/// Reads from the event service root.
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
#[strum(serialize_all = "lowercase")]
pub enum EventCommand {
    Types,
    Health,
    State,
}

impl EventCommand {
    pub(crate) fn route(self) -> Route {
        match self {
            EventCommand::Types => Route::root_field("/EventTypesForSubscription"),
            EventCommand::Health => Route::root_field("/Status/Health"),
            EventCommand::State => Route::root_field("/Status/State"),
        }
    }
}
