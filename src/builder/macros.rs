//! Macros for ergonomic machine construction.

/// Declare a [`MooreMachine`](crate::builder::MooreMachine) in one block.
///
/// State names and input symbols are written as identifiers and stored as
/// their string form. The transitions block may be empty.
///
/// # Example
///
/// ```
/// use moore::moore_machine;
///
/// let machine = moore_machine! {
///     "Toggle" {
///         states {
///             Off => "0",
///             On => "1",
///         }
///         transitions {
///             Off -> On on press,
///             On -> Off on press,
///         }
///         initial: Off
///     }
/// };
///
/// assert_eq!(machine.initial_state(), Some("Off"));
/// assert_eq!(machine.transitions().len(), 2);
/// ```
#[macro_export]
macro_rules! moore_machine {
    (
        $name:literal {
            states {
                $($state:ident => $output:expr),* $(,)?
            }
            transitions {
                $($source:ident -> $target:ident on $on:ident),* $(,)?
            }
            initial: $initial:ident $(,)?
        }
    ) => {{
        let machine = $crate::builder::MooreMachine::new($name);
        $(
            let machine = machine.state(stringify!($state), $output);
        )*
        $(
            let machine = machine.transition(
                stringify!($source),
                stringify!($target),
                stringify!($on),
            );
        )*
        machine.initial(stringify!($initial))
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::Transition;

    #[test]
    fn moore_machine_macro_builds_definition() {
        let machine = moore_machine! {
            "TrafficLight" {
                states {
                    Red => "STOP",
                    Green => "GO",
                    Yellow => "SLOW",
                }
                transitions {
                    Red -> Green on timer,
                    Green -> Yellow on timer,
                    Yellow -> Red on timer,
                }
                initial: Red
            }
        };

        assert_eq!(machine.name(), "TrafficLight");
        assert_eq!(machine.state_count(), 3);
        assert_eq!(machine.output_of("Yellow"), Some(&"SLOW"));
        assert_eq!(machine.transitions()[2], Transition::new("Yellow", "Red", "timer"));
        assert!(machine.validate().is_ok());
    }

    #[test]
    fn moore_machine_macro_allows_no_transitions() {
        let machine = moore_machine! {
            "Static" {
                states {
                    Idle => 0u32
                }
                transitions {}
                initial: Idle
            }
        };

        assert!(machine.transitions().is_empty());
        assert_eq!(machine.initial_state(), Some("Idle"));
    }

    #[test]
    fn moore_machine_macro_does_not_validate() {
        let machine = moore_machine! {
            "Broken" {
                states {
                    A => 'a',
                }
                transitions {
                    A -> B on go,
                }
                initial: A
            }
        };

        assert!(machine.validate().is_err());
    }
}
