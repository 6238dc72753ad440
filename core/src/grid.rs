use std::ops::{Index, IndexMut};

use crate::error::{NoiseError, Result};

// 2D buffer stored row-major in one contiguous Vec
// access as `grid[(row, col)]`, row < height, col < width
#[derive(Debug, Clone, PartialEq)]
pub struct Grid2D<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid2D<T> {
    // Allocate a width×height grid filled with T::default()
    // Zero-sized or unallocatable grids are reported, never aborted on
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(NoiseError::EmptyGrid { width, height });
        }
        let cells = width
            .checked_mul(height)
            .ok_or(NoiseError::TooLarge { width, height })?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(cells)
            .map_err(|_| NoiseError::AllocationFailed { cells })?;
        buf.resize(cells, T::default());

        Ok(Self {
            width,
            height,
            cells: buf,
        })
    }
}

impl<T> Grid2D<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    // Total number of cells (width × height)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.offset(row, col).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        match self.offset(row, col) {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    // One slice per row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks_exact(self.width)
    }

    // The flat row-major view, length = width × height
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    // Overwrite every cell with f(row, col), row by row
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize) -> T,
    {
        let width = self.width;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = f(i / width, i % width);
        }
    }
}

impl<T> Index<(usize, usize)> for Grid2D<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.offset(row, col) {
            Some(i) => &self.cells[i],
            None => panic!(
                "cell ({row}, {col}) out of bounds for {}x{} grid",
                self.width, self.height
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Grid2D<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let (width, height) = (self.width, self.height);
        match self.offset(row, col) {
            Some(i) => &mut self.cells[i],
            None => panic!("cell ({row}, {col}) out of bounds for {width}x{height} grid"),
        }
    }
}
