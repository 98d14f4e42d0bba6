//
// hungarian-rs is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License  v3
// as published by the Free Software Foundation.
//
// hungarian-rs is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY.
// See the GNU Lesser General Public License  for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with hungarian-rs. If not, see http://www.gnu.org/licenses/lgpl-3.0.en.html
//
// Copyright (c)  2022 by X. Gillard
//

//! This module provides the definition and implementation of the solver:
//! its core abstractions, the cost matrix, the driver of the Hungarian method
//! and the hooks to observe it while it runs.

mod core;
mod matrix;
mod observer;
mod solver;

pub use self::core::*;
pub use matrix::*;
pub use observer::*;
pub use solver::*;
