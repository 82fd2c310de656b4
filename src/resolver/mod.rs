//! Command availability resolution.
//!
//! Every tool wrapper asks this module whether its binary is present before
//! shelling out, and uses it to report a missing tool at most once per
//! session.
//!
//! # Modules
//!
//! - [`availability`] - The memoizing resolver and warning suppression
//! - [`name`] - Validated command names and platform case rules
//! - [`probe`] - The probe capability and the PATH-based implementation
//! - [`mock`] - Scriptable probe for tests
//!
//! # Example
//!
//! ```
//! use toolprobe::resolver::{AvailabilityResolver, MockProbe};
//! use toolprobe::ui::MockUI;
//!
//! let resolver = AvailabilityResolver::new(MockProbe::with_available(["go"]));
//! let mut ui = MockUI::new();
//!
//! assert!(resolver.warn_if_missing("go", "scoop install go", &mut ui).unwrap());
//! assert!(!resolver.warn_if_missing("kubectl", "scoop install kubectl", &mut ui).unwrap());
//! assert!(!resolver.warn_if_missing("kubectl", "scoop install kubectl", &mut ui).unwrap());
//! assert_eq!(ui.warnings().len(), 1);
//! ```

pub mod availability;
pub mod mock;
pub mod name;
pub mod probe;

pub use availability::AvailabilityResolver;
pub use mock::MockProbe;
pub use name::{CommandName, CASE_INSENSITIVE};
pub use probe::{CommandProbe, PathProbe};
