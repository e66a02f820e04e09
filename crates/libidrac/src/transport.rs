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

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT};
use reqwest::{Client as HttpClient, ClientBuilder, Method, StatusCode};
use tracing::debug;

use crate::{EndpointConfig, IdracError, IdracResult};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_RESPONSE_LEN: u64 = 20 * 1024 * 1024;

/// HTTP verbs the resolver needs from a management controller.
///
/// `get` hands back the decoded body whatever the status code, since iDRAC
/// reports failures as a JSON error envelope that the resolver interprets.
/// `post` and `patch` only report the status code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, uri: &str) -> IdracResult<serde_json::Value>;
    async fn post(&self, uri: &str, payload: &serde_json::Value) -> IdracResult<StatusCode>;
    async fn patch(&self, uri: &str, payload: &serde_json::Value) -> IdracResult<StatusCode>;
}

#[derive(Clone, Debug)]
pub struct IdracClientBuilder {
    pub timeout: Duration,
}

impl IdracClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(&self, endpoint: EndpointConfig) -> IdracResult<IdracHttpClient> {
        // Management controllers ship self-signed certificates, they are never verified.
        let client = ClientBuilder::new()
            .danger_accept_invalid_certs(true)
            .timeout(self.timeout)
            .build()
            .map_err(IdracError::ClientBuild)?;

        Ok(IdracHttpClient { endpoint, client })
    }
}

/// [`Transport`] over HTTPS with basic authentication. Calls are never retried.
#[derive(Debug, Clone)]
pub struct IdracHttpClient {
    endpoint: EndpointConfig,
    client: HttpClient,
}

impl IdracHttpClient {
    pub fn builder() -> IdracClientBuilder {
        IdracClientBuilder {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> IdracResult<(StatusCode, String)> {
        let mut req_b = self
            .client
            .request(method.clone(), url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(USER_AGENT, HeaderValue::from_static("libidrac/0.1"))
            .basic_auth(&self.endpoint.username, Some(&self.endpoint.password));

        if let Some(b) = body {
            let body_enc = serde_json::to_string(b).map_err(|e| IdracError::JsonSerializeError {
                url: url.to_string(),
                object_debug: format!("{b:?}"),
                source: e,
            })?;
            req_b = req_b
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body_enc);
        }

        debug!("TX {method} {url}");
        let mut response = req_b.send().await.map_err(|e| IdracError::NetworkError {
            url: url.to_string(),
            source: e,
        })?;
        let status_code = response.status();
        if let Some(len) = response.content_length()
            && len > MAX_RESPONSE_LEN
        {
            return Err(too_large(url, len));
        }

        // Chunked responses carry no length, the limit is enforced while reading.
        let mut response_buffer = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| IdracError::NetworkError {
                url: url.to_string(),
                source: e,
            })?
        {
            let len = (response_buffer.len() + chunk.len()) as u64;
            if len > MAX_RESPONSE_LEN {
                return Err(too_large(url, len));
            }
            response_buffer.extend_from_slice(&chunk);
        }
        let response_body = String::from_utf8_lossy(&response_buffer).to_string();
        debug!("RX {status_code} {}", truncate(&response_body, 1500));

        Ok((status_code, response_body))
    }
}

#[async_trait]
impl Transport for IdracHttpClient {
    async fn get(&self, uri: &str) -> IdracResult<serde_json::Value> {
        let (status_code, body) = self.send(Method::GET, uri, None).await?;
        serde_json::from_str(&body).map_err(|e| IdracError::JsonDeserializeError {
            url: uri.to_string(),
            status_code,
            body,
            source: e,
        })
    }

    async fn post(&self, uri: &str, payload: &serde_json::Value) -> IdracResult<StatusCode> {
        let (status_code, _) = self.send(Method::POST, uri, Some(payload)).await?;
        Ok(status_code)
    }

    async fn patch(&self, uri: &str, payload: &serde_json::Value) -> IdracResult<StatusCode> {
        let (status_code, _) = self.send(Method::PATCH, uri, Some(payload)).await?;
        Ok(status_code)
    }
}

fn too_large(url: &str, len: u64) -> IdracError {
    IdracError::UnexpectedShape {
        url: url.to_string(),
        pointer: String::new(),
        detail: format!("response length {len} exceeds 20MB limit"),
    }
}

fn truncate(s: &str, len: usize) -> &str {
    match s.char_indices().nth(len) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
