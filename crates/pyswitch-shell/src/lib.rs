// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

pub mod dialect;
pub mod stdio;
pub mod switcher;
pub mod writer;
