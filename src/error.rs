// © 2020, ETH Zurich
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// The absolute value of the operand does not fit into an `i32`.
///
/// Only `i32::MIN` triggers this: its magnitude exceeds `i32::MAX` by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

impl std::fmt::Display for Overflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the absolute value of {} does not fit into an i32", i32::MIN)
    }
}

impl std::error::Error for Overflow {}
