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

use std::fmt;

use crate::Subsystem;

pub const DEFAULT_USERNAME: &str = "root";
pub const DEFAULT_PASSWORD: &str = "calvin";
pub const REDFISH_ROOT: &str = "/redfish/v1";

// iDRAC exposes exactly one system, chassis and manager.
const SYSTEM_ID: &str = "System.Embedded.1";
const CHASSIS_ID: &str = "System.Embedded.1";
const MANAGER_ID: &str = "iDRAC.Embedded.1";

/// Address and credentials of one management controller.
#[derive(Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub address: String,
    pub username: String,
    pub password: String,
}

impl EndpointConfig {
    pub fn new(address: impl Into<String>) -> Self {
        EndpointConfig {
            address: address.into(),
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Scheme and authority of the controller. A bare address gets `https://`,
    /// an address that already names a scheme is used as is.
    pub fn origin(&self) -> String {
        let address = self.address.trim_end_matches('/');
        if address.contains("://") {
            address.to_string()
        } else {
            format!("https://{address}")
        }
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Well-known resource URIs of an iDRAC, derived once from the endpoint address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRoots {
    pub system: String,
    pub chassis: String,
    pub manager: String,
    pub event_service: String,
    pub sessions: String,
    pub task_service: String,
    pub update_service: String,
}

impl ResourceRoots {
    pub fn from_endpoint(endpoint: &EndpointConfig) -> Self {
        let root = format!("{}{REDFISH_ROOT}", endpoint.origin());
        ResourceRoots {
            system: format!("{root}/Systems/{SYSTEM_ID}"),
            chassis: format!("{root}/Chassis/{CHASSIS_ID}"),
            manager: format!("{root}/Managers/{MANAGER_ID}"),
            event_service: format!("{root}/EventService"),
            sessions: format!("{root}/Sessions"),
            task_service: format!("{root}/TaskService"),
            update_service: format!("{root}/UpdateService"),
        }
    }

    /// Root resource that commands of `subsystem` are resolved against.
    pub fn for_subsystem(&self, subsystem: Subsystem) -> &str {
        match subsystem {
            Subsystem::System => &self.system,
            Subsystem::Chassis => &self.chassis,
            Subsystem::Manager => &self.manager,
            Subsystem::Event => &self.event_service,
            Subsystem::Session => &self.sessions,
            Subsystem::Fw => &self.update_service,
        }
    }
}
