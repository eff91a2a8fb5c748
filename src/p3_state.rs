//! Pattern 3: Behavioral Patterns
//! Example: State - A TCP Connection That Changes Behavior with Its State
//!
//! Run with: cargo run --bin p3_state
//!
//! The connection delegates every operation to its current state object, so
//! the same call behaves differently in Closed, Listening, and Established.
//! This is teaching code: no socket is ever opened, the "connection" only
//! narrates what a real one would do.
//!
//! One deliberate departure from the classic write-up: the textbook version
//! prints "Transitioning from X to Y" without ever mutating anything. Here
//! every operation returns the next state tag and the connection applies it,
//! so the announced transitions actually happen. `set_state` remains for
//! explicit, unvalidated jumps driven by the client.

// ============================================================================
// Example: State with Trait Objects
// ============================================================================

/// Closed set of connection states; no other states exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StateTag {
    Closed,
    Listening,
    Established,
}

/// Capability set every state must implement. Each operation reports what
/// happened and names the state the connection should be in afterwards
/// (possibly the same one). Invalid operations report failure text; they
/// never panic.
trait ConnectionState {
    fn tag(&self) -> StateTag;
    fn open(&self) -> (String, StateTag);
    fn close(&self) -> (String, StateTag);
    fn send_data(&self, data: &str) -> (String, StateTag);
    fn receive_data(&self, data: &str) -> (String, StateTag);
}

struct ClosedState;

impl ConnectionState for ClosedState {
    fn tag(&self) -> StateTag {
        StateTag::Closed
    }

    fn open(&self) -> (String, StateTag) {
        (
            "Transitioning from Closed to Listening state.".to_string(),
            StateTag::Listening,
        )
    }

    fn close(&self) -> (String, StateTag) {
        ("Already in Closed state.".to_string(), StateTag::Closed)
    }

    fn send_data(&self, _data: &str) -> (String, StateTag) {
        (
            "Cannot send data. Connection is closed.".to_string(),
            StateTag::Closed,
        )
    }

    fn receive_data(&self, _data: &str) -> (String, StateTag) {
        (
            "Cannot receive data. Connection is closed.".to_string(),
            StateTag::Closed,
        )
    }
}

struct ListeningState;

impl ConnectionState for ListeningState {
    fn tag(&self) -> StateTag {
        StateTag::Listening
    }

    fn open(&self) -> (String, StateTag) {
        ("Already in Listening state.".to_string(), StateTag::Listening)
    }

    fn close(&self) -> (String, StateTag) {
        (
            "Transitioning from Listening to Closed state.".to_string(),
            StateTag::Closed,
        )
    }

    fn send_data(&self, _data: &str) -> (String, StateTag) {
        (
            "Cannot send data. Connection is in Listening state.".to_string(),
            StateTag::Listening,
        )
    }

    fn receive_data(&self, _data: &str) -> (String, StateTag) {
        (
            "Transitioning from Listening to Established state.".to_string(),
            StateTag::Established,
        )
    }
}

struct EstablishedState;

impl ConnectionState for EstablishedState {
    fn tag(&self) -> StateTag {
        StateTag::Established
    }

    fn open(&self) -> (String, StateTag) {
        (
            "Already in Established state.".to_string(),
            StateTag::Established,
        )
    }

    fn close(&self) -> (String, StateTag) {
        (
            "Transitioning from Established to Closed state.".to_string(),
            StateTag::Closed,
        )
    }

    fn send_data(&self, data: &str) -> (String, StateTag) {
        (format!("Sending data: {}", data), StateTag::Established)
    }

    fn receive_data(&self, data: &str) -> (String, StateTag) {
        (format!("Receiving data: {}", data), StateTag::Established)
    }
}

fn state_for(tag: StateTag) -> Box<dyn ConnectionState> {
    match tag {
        StateTag::Closed => Box::new(ClosedState),
        StateTag::Listening => Box::new(ListeningState),
        StateTag::Established => Box::new(EstablishedState),
    }
}

/// Context. Owns exactly one state at a time and forwards every operation
/// to it, then applies whatever transition the state named.
struct TcpConnection {
    state: Box<dyn ConnectionState>,
}

impl TcpConnection {
    /// A fresh connection is always Closed.
    fn new() -> Self {
        Self {
            state: Box::new(ClosedState),
        }
    }

    fn state(&self) -> StateTag {
        self.state.tag()
    }

    /// Replaces the active state unconditionally; any state can be set from
    /// any state and the swap cannot fail.
    fn set_state(&mut self, state: Box<dyn ConnectionState>) {
        self.state = state;
    }

    fn open(&mut self) -> String {
        let (message, next) = self.state.open();
        self.transition(next);
        message
    }

    fn close(&mut self) -> String {
        let (message, next) = self.state.close();
        self.transition(next);
        message
    }

    fn send_data(&mut self, data: &str) -> String {
        let (message, next) = self.state.send_data(data);
        self.transition(next);
        message
    }

    fn receive_data(&mut self, data: &str) -> String {
        let (message, next) = self.state.receive_data(data);
        self.transition(next);
        message
    }

    fn transition(&mut self, next: StateTag) {
        if next != self.state.tag() {
            self.state = state_for(next);
        }
    }
}

fn state_trait_object_example() {
    let mut connection = TcpConnection::new();

    // Data operations fail while closed; the failure is reported, not fatal.
    println!("{}", connection.send_data("Hello"));
    println!("{}", connection.receive_data("Hi"));

    connection.set_state(Box::new(ListeningState));
    println!("{}", connection.receive_data("Hello"));

    connection.set_state(Box::new(EstablishedState));
    println!("{}", connection.send_data("Hello"));
    println!("{}", connection.receive_data("Hi"));

    println!("{}", connection.close());
}

// ============================================================================
// Example: State with Enums
// ============================================================================

// The same machine as a tagged union: one match arm per (state, operation)
// pair makes the transition table exhaustive at compile time.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op<'a> {
    Open,
    Close,
    SendData(&'a str),
    ReceiveData(&'a str),
}

struct EnumConnection {
    state: StateTag,
}

impl EnumConnection {
    fn new() -> Self {
        Self {
            state: StateTag::Closed,
        }
    }

    fn state(&self) -> StateTag {
        self.state
    }

    #[allow(dead_code)]
    fn set_state(&mut self, state: StateTag) {
        self.state = state;
    }

    fn handle(&mut self, op: Op<'_>) -> String {
        let (message, next) = match (self.state, op) {
            (StateTag::Closed, Op::Open) => (
                "Transitioning from Closed to Listening state.".to_string(),
                StateTag::Listening,
            ),
            (StateTag::Closed, Op::Close) => {
                ("Already in Closed state.".to_string(), StateTag::Closed)
            }
            (StateTag::Closed, Op::SendData(_)) => (
                "Cannot send data. Connection is closed.".to_string(),
                StateTag::Closed,
            ),
            (StateTag::Closed, Op::ReceiveData(_)) => (
                "Cannot receive data. Connection is closed.".to_string(),
                StateTag::Closed,
            ),
            (StateTag::Listening, Op::Open) => (
                "Already in Listening state.".to_string(),
                StateTag::Listening,
            ),
            (StateTag::Listening, Op::Close) => (
                "Transitioning from Listening to Closed state.".to_string(),
                StateTag::Closed,
            ),
            (StateTag::Listening, Op::SendData(_)) => (
                "Cannot send data. Connection is in Listening state.".to_string(),
                StateTag::Listening,
            ),
            (StateTag::Listening, Op::ReceiveData(_)) => (
                "Transitioning from Listening to Established state.".to_string(),
                StateTag::Established,
            ),
            (StateTag::Established, Op::Open) => (
                "Already in Established state.".to_string(),
                StateTag::Established,
            ),
            (StateTag::Established, Op::Close) => (
                "Transitioning from Established to Closed state.".to_string(),
                StateTag::Closed,
            ),
            (StateTag::Established, Op::SendData(data)) => {
                (format!("Sending data: {}", data), StateTag::Established)
            }
            (StateTag::Established, Op::ReceiveData(data)) => {
                (format!("Receiving data: {}", data), StateTag::Established)
            }
        };

        self.state = next;
        message
    }
}

fn state_enum_example() {
    let mut connection = EnumConnection::new();

    println!("{}", connection.handle(Op::Open));
    println!("{}", connection.handle(Op::ReceiveData("Hello")));
    println!("{}", connection.handle(Op::SendData("Hi")));
    println!("{}", connection.handle(Op::Close));
    println!("Final state: {:?}", connection.state());
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("=== State Pattern (Trait Objects) ===");
    state_trait_object_example();
    println!();

    println!("=== State Pattern (Enums) ===");
    state_enum_example();
}
