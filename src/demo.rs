// © 2020, ETH Zurich
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![deny(unused_must_use)]

use abs_inplace::abs_in_place;
use log::debug;
use std::io::Write;

fn main() -> Result<(), std::io::Error> {
    env_logger::init_from_env(env_logger::Env::new().filter_or("ABS_DEMO_LOG", "info"));

    let mut value = 42;
    abs_in_place(&mut value);
    debug!("abs_in_place result: {}", value);

    // The digits only, without a trailing newline.
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", value)?;
    handle.flush()
}
