//! Scenario tests driving the controller the way a user would.

mod scenarios;
