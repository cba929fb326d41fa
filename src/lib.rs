#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order Cart
//!
//! > **A shopping cart for a restaurant menu, built on resource-oriented actors.**
//!
//! A visitor picks menu items (choosing half or full portions where the menu offers both), builds
//! up an order that survives page reloads within a browsing session, and hands the finished order
//! to a chat deep link. There is no payment step and no backend order system.
//!
//! ## 🏗️ Design
//!
//! ### One owner for the order
//! The [`Order`](model::Order) is a plain value. Each open page view holds one inside a
//! [`Cart`](model::Cart) entity owned by a [`ResourceActor`](framework::ResourceActor), which
//! processes commands one at a time. After every mutation the actor saves the order to the
//! session store and renders it; side effects go through the traits in
//! [`CartContext`](cart_actor::CartContext), injected when the actor starts.
//!
//! ### Page views and sessions
//! Opening a cart is a page load: the actor restores the session's saved order in `on_create`.
//! Closing it is an unload and leaves the saved order in place. Two page views of one session
//! share a slot, and the last write wins.
//!
//! ### Mocking
//! Typed clients are tested without an actor through [`framework::mock`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` loop, its client and the [`ActorEntity`](framework::ActorEntity)
//! contract.
//!
//! ### 2. The Cart ([`model`], [`cart_actor`], [`clients`])
//! - [`model`]: line items, the order and its invariants.
//! - [`cart_actor`]: the command set and the `ActorEntity` implementation for `Cart`.
//! - [`clients`]: [`CartClient`](clients::CartClient), the typed API over the actor's channel.
//!
//! ### 3. Collaborators ([`storage`], [`view`], [`checkout`], [`menu`])
//! - [`storage`]: session-scoped slots in memory or on disk.
//! - [`view`]: the pure projection of an order and the surfaces that display it.
//! - [`checkout`]: the order message and the chat deep link.
//! - [`menu`]: price labels, portion selection and the add-to-cart path.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`config`], [`cli`])
//! [`CartSystem`](lifecycle::CartSystem) spawns and wires the actor; the command line front end
//! drives it.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! order-cart menu
//! order-cart add "Paneer Tikka" --portion half
//! order-cart show
//! order-cart checkout
//! ```

pub mod cart_actor;
pub mod checkout;
pub mod cli;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod menu;
pub mod model;
pub mod storage;
pub mod view;
