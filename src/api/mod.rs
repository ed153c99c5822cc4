//! API Module - Popup-Facing Commands

pub mod commands;
