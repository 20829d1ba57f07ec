// src/config/config_types.rs
//
// Config types for the app

use nannou::prelude::*;
use serde::Deserialize;
use std::time::Duration;

/*************************** Host settings ***********************/
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            fullscreen: false,
        }
    }
}

fn default_width() -> u32 {
    480
}

fn default_height() -> u32 {
    800
}

fn default_title() -> String {
    "bouncydots".to_string()
}

/************************* Visual constants ********************/

/// Fixed tuning values for the dot chain. Built once and handed to the chain and renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    pub node_count: usize,
    pub parts: usize,
    pub stroke_factor: f32,
    pub size_factor: f32,
    pub radius_factor: f32,
    pub step_size: f32,
    pub tick_delay: Duration,
    pub fore_color: Rgb<f32>,
    pub back_color: Rgb<f32>,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            node_count: 5,
            parts: 2,
            stroke_factor: 90.0,
            size_factor: 2.9,
            radius_factor: 3.5,
            step_size: 0.02,
            tick_delay: Duration::from_millis(20),
            fore_color: hex_rgb(0x4CAF50),
            back_color: hex_rgb(0xBDBDBD),
        }
    }
}

/// 0xRRGGBB to a float rgb color
pub fn hex_rgb(hex: u32) -> Rgb<f32> {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    rgb(channel(16), channel(8), channel(0))
}
