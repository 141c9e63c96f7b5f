//! 把一维序列切成定长分组，用于按行输出数组

/// 定长分组迭代器
///
/// 每组长度都是 `n`，最后一组不足时用 `fill` 补齐。
/// 哪些元素是补出来的由调用方自己判断并去掉，这里不关心。
pub struct PaddedChunks<I: Iterator> {
    iter: I,
    n: usize,
    fill: I::Item,
}

impl<I> Iterator for PaddedChunks<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.iter.next()?;

        let mut group = Vec::with_capacity(self.n);
        group.push(first);
        group.extend(self.iter.by_ref().take(self.n - 1));
        group.resize(self.n, self.fill.clone());
        Some(group)
    }
}

/// 将 `iter` 按 `n` 个一组切分，最后一组用 `fill` 补齐
///
/// # Panics
/// `n` 为 0 时 panic
pub fn padded_chunks<I>(iter: I, n: usize, fill: I::Item) -> PaddedChunks<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    assert!(n >= 1, "chunk size must be at least 1");
    PaddedChunks {
        iter: iter.into_iter(),
        n,
        fill,
    }
}
