// badwords: word-list profanity detection over HTTP
//
// This is the library root. Text flows normalize -> detect -> web; wordlist
// supplies the frozen term sets the detectors are built from.

pub mod config;
pub mod detect;
pub mod normalize;
pub mod output;
pub mod web;
pub mod wordlist;
