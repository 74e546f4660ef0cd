// Copyright (c) Trade Tracker contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod trades;
pub mod balances;
pub mod deposits;
pub mod reports;
pub mod importer;
pub mod exporter;
pub mod prefs;
pub mod doctor;
