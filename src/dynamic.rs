// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Calling heap operations with an untyped argument list.
//!
//! The typed methods on `Heap` cannot be called with the wrong number of arguments. Callers
//! that only have a method name and a list of values at hand (bindings, replayed operation
//! logs) go through `Heap::invoke` instead, which validates the argument count before it
//! touches the heap.

use std::fmt;

use compare::Compare;

use crate::Heap;

/// A heap operation that can be invoked dynamically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// `Heap::seek`, no arguments.
    Seek,
    /// `Heap::push_all`, any number of arguments.
    Push,
    /// `Heap::pop`, no arguments.
    Pop,
    /// `Heap::delete`, exactly one argument.
    Delete,
    /// `Heap::to_vec`, no arguments.
    ToArray,
    /// `Heap::is_array`, no arguments.
    IsArray,
    /// `Heap::len`, no arguments.
    Len,
}

impl Method {
    /// The number of arguments the method takes, or `None` if it takes any number.
    pub fn arity(self) -> Option<usize> {
        match self {
            Method::Push => None,
            Method::Delete => Some(1),
            Method::Seek | Method::Pop | Method::ToArray | Method::IsArray | Method::Len => Some(0),
        }
    }

    /// The method's name as it appears in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Method::Seek => "seek",
            Method::Push => "push",
            Method::Pop => "pop",
            Method::Delete => "delete",
            Method::ToArray => "to_vec",
            Method::IsArray => "is_array",
            Method::Len => "len",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 { "" } else { "s" }
}

/// Error type for dynamically invoked heap operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The method was called with the wrong number of arguments. The heap was not modified.
    #[error("expected {expected} argument{} for .{method}() but received {received}", plural(.expected))]
    InvalidArgumentCount {
        method: Method,
        expected: usize,
        received: usize,
    },
}

/// The result of a dynamically invoked heap operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply<T> {
    /// An item, or `None` for an empty heap or an absent item (`Seek`, `Pop`, `Delete`).
    Item(Option<T>),
    /// The heap's length (`Push`, `Len`).
    Len(usize),
    /// A copy of the storage in heap order (`ToArray`).
    Items(Vec<T>),
    /// `IsArray`.
    Flag(bool),
}

impl<T: Clone + PartialEq, C: Compare<T>> Heap<T, C> {
    /// Calls `method` with `args`.
    ///
    /// Returns `Error::InvalidArgumentCount`, without modifying the heap, if `args` does not
    /// match the method's arity.
    ///
    /// # Examples
    ///
    /// ```
    /// use comparator_heap::{Error, Heap, Method, Reply};
    ///
    /// let mut heap = Heap::new();
    /// assert_eq!(heap.invoke(Method::Push, vec![4, 2, 9]), Ok(Reply::Len(3)));
    /// assert_eq!(heap.invoke(Method::Pop, vec![]), Ok(Reply::Item(Some(2))));
    ///
    /// let err = heap.invoke(Method::Seek, vec![1]).unwrap_err();
    /// assert_eq!(err, Error::InvalidArgumentCount { method: Method::Seek, expected: 0, received: 1 });
    /// assert_eq!(err.to_string(), "expected 0 arguments for .seek() but received 1");
    /// ```
    pub fn invoke(&mut self, method: Method, args: Vec<T>) -> Result<Reply<T>, Error> {
        if let Some(expected) = method.arity() {
            if args.len() != expected {
                return Err(Error::InvalidArgumentCount {
                    method: method,
                    expected: expected,
                    received: args.len(),
                });
            }
        }

        Ok(match method {
            Method::Seek => Reply::Item(self.seek().cloned()),
            Method::Push => Reply::Len(self.push_all(args)),
            Method::Pop => Reply::Item(self.pop()),
            Method::Delete => Reply::Item(self.delete(&args[0])),
            Method::ToArray => Reply::Items(self.to_vec()),
            Method::IsArray => Reply::Flag(self.is_array()),
            Method::Len => Reply::Len(self.len()),
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Error, Method, Reply};
    use crate::Heap;

    fn sample() -> Heap<i32> {
        Heap::from(vec![6, 5, 7, 2, 4, 9, 2, 8])
    }

    #[test]
    fn test_arity() {
        assert_eq!(Method::Push.arity(), None);
        assert_eq!(Method::Delete.arity(), Some(1));
        for &m in &[Method::Seek, Method::Pop, Method::ToArray, Method::IsArray, Method::Len] {
            assert_eq!(m.arity(), Some(0));
        }
    }

    #[test]
    fn test_wrong_arity_leaves_heap_untouched() {
        let calls = vec![
            (Method::Seek, vec![1]),
            (Method::Pop, vec![1]),
            (Method::ToArray, vec![1]),
            (Method::IsArray, vec![1, 2]),
            (Method::Delete, vec![]),
            (Method::Delete, vec![2, 4]),
        ];
        for (method, args) in calls {
            let mut heap = sample();
            let before = heap.to_vec();
            let received = args.len();
            match heap.invoke(method, args) {
                Err(Error::InvalidArgumentCount { method: m, expected, received: r }) => {
                    assert_eq!(m, method);
                    assert_eq!(Some(expected), method.arity());
                    assert_eq!(r, received);
                }
                other => panic!("{} accepted {} arguments: {:?}", method, received, other),
            }
            assert_eq!(heap.to_vec(), before);
        }
    }

    #[test]
    fn test_error_message() {
        let err = Error::InvalidArgumentCount { method: Method::Delete, expected: 1, received: 2 };
        assert_eq!(err.to_string(), "expected 1 argument for .delete() but received 2");
        let err = Error::InvalidArgumentCount { method: Method::Pop, expected: 0, received: 1 };
        assert_eq!(err.to_string(), "expected 0 arguments for .pop() but received 1");
    }

    #[test]
    fn test_dispatch() {
        let mut heap = sample();
        assert_eq!(heap.invoke(Method::Seek, vec![]), Ok(Reply::Item(Some(2))));
        assert_eq!(heap.invoke(Method::Len, vec![]), Ok(Reply::Len(8)));
        assert_eq!(heap.invoke(Method::ToArray, vec![]), Ok(Reply::Items(heap.to_vec())));
        assert_eq!(heap.invoke(Method::IsArray, vec![]), Ok(Reply::Flag(false)));
        assert_eq!(heap.invoke(Method::Delete, vec![7]), Ok(Reply::Item(Some(7))));
        assert_eq!(heap.invoke(Method::Delete, vec![7]), Ok(Reply::Item(None)));
        assert_eq!(heap.invoke(Method::Push, vec![]), Ok(Reply::Len(7)));
        assert_eq!(heap.invoke(Method::Push, vec![0, 1]), Ok(Reply::Len(9)));
        assert_eq!(heap.invoke(Method::Pop, vec![]), Ok(Reply::Item(Some(0))));
    }

    #[test]
    fn test_empty_heap() {
        let mut heap = Heap::<i32>::new();
        assert_eq!(heap.invoke(Method::Seek, vec![]), Ok(Reply::Item(None)));
        assert_eq!(heap.invoke(Method::Pop, vec![]), Ok(Reply::Item(None)));
        assert_eq!(heap.invoke(Method::Len, vec![]), Ok(Reply::Len(0)));
    }
}
