/*!
Configuration of a context.

All configuration for a context is contained within the context, and is fixed when the context is built.

```rust
# use otter_monadic::config::{Config, InterpretationOrder};
# use otter_monadic::context::Context;
let mut config = Config::default();
config.interpretation_order.value = InterpretationOrder::Shuffled;
config.seed.value = 73;

let the_context = Context::from_config(config);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod interpretation_order;
pub use interpretation_order::InterpretationOrder;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The order in which to examine interpretations.
    pub interpretation_order: ConfigOption<InterpretationOrder>,

    /// The seed of the source of rng.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    /// The default context examines interpretations in canonical order, and so is deterministic.
    fn default() -> Self {
        Config {
            interpretation_order: ConfigOption {
                name: "interpretation_order",
                min: InterpretationOrder::MIN,
                max: InterpretationOrder::MAX,
                value: InterpretationOrder::Canonical,
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },
        }
    }
}
