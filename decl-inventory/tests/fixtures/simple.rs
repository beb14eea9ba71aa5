// SPDX-FileCopyrightText: 2026 LunNova
//
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::LazyLock;

const VERSION: &str = "1.0.0";

struct Point {
    x: f64,
    y: f64,
}

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn main() {
    println!("Hello, World!");
}

#[repr(i32)]
enum Status {
    Ok = 0,
    Error = 1,
}

static GLOBAL_CONFIG: LazyLock<HashMap<&str, &str>> = LazyLock::new(|| HashMap::from([("debug", "false")]));
