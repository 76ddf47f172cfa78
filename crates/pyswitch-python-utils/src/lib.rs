// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

pub mod executable;
pub mod headers;
pub mod interpreter;
pub mod process;
pub mod version;
