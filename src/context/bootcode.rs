/// Boot code loading

use std::fs::File;
use std::path::Path;

use tracing::debug;

use super::BuildContext;
use crate::error::{Result, SchemeError};
use crate::io::BootSource;

impl BuildContext<'_> {
    /// Load boot code to embed in the image
    ///
    /// `None` skips embedding and always succeeds. Otherwise the whole source
    /// is read into a zero-filled buffer of exactly the scheme's boot code
    /// capacity. Any failure leaves no boot code loaded.
    pub fn load_boot_code(&mut self, source: Option<&mut dyn BootSource>) -> Result<()> {
        let Some(source) = source else {
            return Ok(());
        };
        let scheme = self.scheme()?;
        self.boot_code = None;

        let capacity = scheme.boot_code_capacity();
        if capacity == 0 {
            return Err(SchemeError::unsupported(format!(
                "the {} scheme has no boot code area",
                scheme.name()
            )));
        }

        let size = source.size().map_err(SchemeError::ReadError)?;
        if size > capacity as u64 {
            return Err(SchemeError::TooLarge { size, capacity });
        }

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| SchemeError::AllocationFailure(capacity))?;
        buffer.resize(capacity, 0);

        // A short read means the source changed under us
        source
            .read_exact(&mut buffer[..size as usize])
            .map_err(SchemeError::ReadError)?;

        debug!(
            "Loaded {} bytes of boot code into {} byte area of {}",
            size,
            capacity,
            scheme.name()
        );
        self.boot_code = Some(buffer);
        Ok(())
    }

    /// Load boot code from a file
    pub fn load_boot_code_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.scheme()?;
        self.boot_code = None;
        let mut file = File::open(path).map_err(SchemeError::ReadError)?;
        self.load_boot_code(Some(&mut file))
    }

    /// The loaded boot code, padded to the scheme's capacity
    pub fn boot_code(&self) -> Option<&[u8]> {
        self.boot_code.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::mock::MockScheme;
    use crate::scheme::{Scheme, SchemeRegistry};
    use std::io::{self, Cursor, Read};

    fn registry() -> SchemeRegistry {
        SchemeRegistry::with_schemes([
            Box::new(MockScheme::mbr()) as Box<dyn Scheme>,
            Box::new(MockScheme::new("gpt")) as Box<dyn Scheme>,
        ])
    }

    /// Reports more bytes than it can deliver
    struct ShrinkingSource {
        data: Cursor<Vec<u8>>,
        reported: u64,
    }

    impl Read for ShrinkingSource {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.data.read(buf)
        }
    }

    impl BootSource for ShrinkingSource {
        fn size(&mut self) -> io::Result<u64> {
            Ok(self.reported)
        }
    }

    #[test]
    fn test_no_source_is_noop() {
        let registry = registry();
        let mut ctx = BuildContext::new(&registry);
        // Even without a scheme
        ctx.load_boot_code(None).unwrap();
        assert!(ctx.boot_code().is_none());
    }

    #[test]
    fn test_requires_scheme() {
        let registry = registry();
        let mut ctx = BuildContext::new(&registry);
        let mut source = Cursor::new(vec![1u8; 4]);
        assert!(matches!(
            ctx.load_boot_code(Some(&mut source)),
            Err(SchemeError::NoSchemeSelected)
        ));
    }

    #[test]
    fn test_unsupported_scheme() {
        let registry = registry();
        let mut ctx = BuildContext::new(&registry);
        ctx.select("gpt").unwrap();
        let mut source = Cursor::new(vec![1u8; 4]);
        assert!(matches!(
            ctx.load_boot_code(Some(&mut source)),
            Err(SchemeError::UnsupportedFeature(_))
        ));
    }

    #[test]
    fn test_padded_to_capacity() {
        let registry = registry();
        let mut ctx = BuildContext::new(&registry);
        ctx.select("mbr").unwrap();
        let mut source = Cursor::new(vec![0xFAu8; 446]);
        ctx.load_boot_code(Some(&mut source)).unwrap();

        let code = ctx.boot_code().unwrap();
        assert_eq!(code.len(), 512);
        assert!(code[..446].iter().all(|&b| b == 0xFA));
        assert!(code[446..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_exact_capacity() {
        let registry = registry();
        let mut ctx = BuildContext::new(&registry);
        ctx.select("mbr").unwrap();
        let mut source = Cursor::new(vec![0x55u8; 512]);
        ctx.load_boot_code(Some(&mut source)).unwrap();
        assert_eq!(ctx.boot_code().unwrap(), &[0x55u8; 512][..]);
    }

    #[test]
    fn test_too_large_clears_previous() {
        let registry = registry();
        let mut ctx = BuildContext::new(&registry);
        ctx.select("mbr").unwrap();
        let mut small = Cursor::new(vec![1u8; 16]);
        ctx.load_boot_code(Some(&mut small)).unwrap();

        let mut large = Cursor::new(vec![1u8; 513]);
        assert!(matches!(
            ctx.load_boot_code(Some(&mut large)),
            Err(SchemeError::TooLarge { size: 513, capacity: 512 })
        ));
        assert!(ctx.boot_code().is_none());
    }

    #[test]
    fn test_short_read_fails() {
        let registry = registry();
        let mut ctx = BuildContext::new(&registry);
        ctx.select("mbr").unwrap();
        let mut source = ShrinkingSource {
            data: Cursor::new(vec![1u8; 100]),
            reported: 200,
        };
        assert!(matches!(
            ctx.load_boot_code(Some(&mut source)),
            Err(SchemeError::ReadError(_))
        ));
        assert!(ctx.boot_code().is_none());
    }

    #[test]
    fn test_from_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xCC; 64]).unwrap();

        let registry = registry();
        let mut ctx = BuildContext::new(&registry);
        ctx.select("mbr").unwrap();
        ctx.load_boot_code_from_path(file.path()).unwrap();
        assert_eq!(&ctx.boot_code().unwrap()[..64], &[0xCC; 64][..]);

        assert!(matches!(
            ctx.load_boot_code_from_path("/nonexistent/boot"),
            Err(SchemeError::ReadError(_))
        ));
        assert!(ctx.boot_code().is_none());
    }
}
