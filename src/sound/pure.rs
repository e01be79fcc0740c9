pub mod presets;
pub mod synth;

// Re-exports
pub use synth::render_cue;
