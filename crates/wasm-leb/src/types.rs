use crate::{frame_vector, ByteTree, Encode, ValType, FUNC_TYPE};

/// A function signature.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FuncType {
    params_results: Box<[ValType]>,
    len_params: usize,
}

impl FuncType {
    /// Create a function type from its parameters and results.
    pub fn new<P, R>(params: P, results: R) -> Self
    where
        P: IntoIterator<Item = ValType>,
        R: IntoIterator<Item = ValType>,
    {
        let mut buffer = params.into_iter().collect::<Vec<_>>();
        let len_params = buffer.len();
        buffer.extend(results);
        Self {
            params_results: buffer.into(),
            len_params,
        }
    }

    /// Parameter types of this function.
    #[inline]
    pub fn params(&self) -> &[ValType] {
        &self.params_results[..self.len_params]
    }

    /// Result types of this function.
    #[inline]
    pub fn results(&self) -> &[ValType] {
        &self.params_results[self.len_params..]
    }
}

impl Encode for FuncType {
    fn encode(&self, sink: &mut Vec<u8>) {
        sink.push(FUNC_TYPE);
        sink.extend(val_types(self.params()));
        sink.extend(val_types(self.results()));
    }
}

fn val_types(tys: &[ValType]) -> Vec<u8> {
    frame_vector(&tys.iter().map(|ty| ty.code()).collect::<ByteTree>())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accessors() {
        let ty = FuncType::new([ValType::I32, ValType::I64], [ValType::F64]);
        assert_eq!(ty.params(), [ValType::I32, ValType::I64]);
        assert_eq!(ty.results(), [ValType::F64]);
    }

    #[test]
    fn encode() {
        let mut sink = Vec::new();
        FuncType::new([ValType::I32, ValType::I32], [ValType::I32]).encode(&mut sink);
        assert_eq!(sink, [0x60, 0x02, 0x7f, 0x7f, 0x01, 0x7f]);

        sink.clear();
        FuncType::new([], []).encode(&mut sink);
        assert_eq!(sink, [0x60, 0x00, 0x00]);
    }
}
