/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Matrix utilities for serial hypergraph matching.
//!
//! The operations themselves live in [`hgmatch_matrix`] and are re-exported
//! here. This crate adds the pieces a program built on them wants: a global
//! logger and a YAML settings file.

#[macro_use]
extern crate log;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate serde_derive;

pub use ::hgmatch_matrix::*;

pub mod config;
pub mod logging;
