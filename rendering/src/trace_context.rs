/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

/// The only state carried along a recursive trace: how deep we are
/// and how deep we are allowed to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceContext {
    /// Number of surfaces the ray has interacted with so far
    pub depth: usize,

    /// Maximum number of surface interactions
    pub max_depth: usize,
}

impl TraceContext {
    /// The context of a primary ray
    pub fn new(max_depth: usize) -> Self {
        Self {
            depth: 0,
            max_depth,
        }
    }

    /// The context of the rays spawned by a surface
    pub fn descend(&self) -> Self {
        Self {
            depth: self.depth + 1,
            ..*self
        }
    }

    /// Has the trace budget been used up?
    pub fn is_exhausted(&self) -> bool {
        self.depth >= self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descend() {
        let ctx = TraceContext::new(2);
        assert!(!ctx.is_exhausted());
        let child = ctx.descend();
        assert_eq!(child.depth, 1);
        assert_eq!(child.max_depth, 2);
        assert!(!child.is_exhausted());
        assert!(child.descend().is_exhausted());
    }
}
