// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behaviour specs for the `agv` binary.
//!
//! The files under `cli/` are compiled as integration test targets of the
//! `afriguard` package (see its `[[test]]` entries) so they can locate the
//! built binary. Each one runs `agv` against throwaway config and state
//! directories and an API address nothing listens on.
