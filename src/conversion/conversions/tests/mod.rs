//! Tests shared by every built-in conversion.
//!
//! `fixtures` holds the same colours written in every codification; the other
//! modules check that the conversions (and the registry paths built from
//! them) map each fixture onto its counterparts.

mod roundtrip_tests;
