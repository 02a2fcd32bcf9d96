/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The only PEM type label accepted as input.
pub const CERTIFICATE_PEM_LABEL: &str = "CERTIFICATE";

/// Number of leading MD5 digest bytes that make up the hash.
pub const SUBJECT_HASH_LEN: usize = 4;

/// Width of the formatted hash, in hex digits.
pub const SUBJECT_HASH_HEX_WIDTH: usize = SUBJECT_HASH_LEN * 2;
