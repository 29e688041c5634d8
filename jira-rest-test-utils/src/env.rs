//! Environment variable management for testing
//!
//! Tests that read process-wide environment variables should hold an
//! [`EnvVarGuard`] so the original value comes back when the test ends.

use std::env;

/// RAII guard that restores one environment variable when dropped
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Remember the current value of `name`
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// Set the variable for the rest of the test
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Unset the variable for the rest of the test
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(value) => unsafe {
        env::set_var(&self.name, value);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}
