//! Embedded word list
//!
//! Sample dictionary compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/sample_words.rs"));
