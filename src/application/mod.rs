// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (converting one export into a deck).
//
// Rules for this layer:
//   - No parsing or regex work here
//   - No UI or printing here (that's Layer 1)
//   - No direct file access (that's Layer 4)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The conversion workflow
pub mod convert_use_case;
