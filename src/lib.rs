//! Integration test package for the finanzas workspace.
