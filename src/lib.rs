// Copyright 2026, The Samba Operator Authors
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;

#[cfg(test)]
pub mod test_utils;
