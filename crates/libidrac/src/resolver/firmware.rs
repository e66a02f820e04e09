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

use super::route::{Extract, ResourcePath, Route};

/// Commands against the update service.
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
pub enum FirmwareCommand {
    FirmwareInventory,
}

impl FirmwareCommand {
    pub(crate) fn route(self) -> Route {
        match self {
            FirmwareCommand::FirmwareInventory => Route::read(
                ResourcePath::Fixed("/FirmwareInventory"),
                Extract::FirmwareInventory,
            ),
        }
    }
}
