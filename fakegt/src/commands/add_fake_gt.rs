use crate::error::FakeGtError;
use crate::logic::add_fake_gt::add_fake_gt;
use crate::utils::{self, Endpoint, STANDARD_STREAM};
use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::Args;
use log::{debug, info};

#[derive(Args, Debug, Clone, PartialEq)]
pub struct AddFakeGenotype {
    #[arg(
        short = 'i',
        long = "vcf-in",
        help = "Input vcf file listing somatic variants (gzip supported; - for stdin)"
    )]
    vcf_in: String,
    #[arg(
        short = 'o',
        long = "vcf-out",
        default_value = STANDARD_STREAM,
        help = "Output vcf file (gzip supported; - for stdout)"
    )]
    vcf_out: String,
    #[arg(
        short = 's',
        long = "sample",
        help = "Sample name",
        value_parser = NonEmptyStringValueParser::new()
    )]
    sample: String,
}

impl AddFakeGenotype {
    pub fn run(&self) -> anyhow::Result<()> {
        let input = Endpoint::from_arg(&self.vcf_in);
        let output = Endpoint::from_arg(&self.vcf_out);
        debug!("input: {:?} / output: {:?}", input, output);

        if let Some(path) = input.path() {
            if !path.exists() {
                return Err(FakeGtError::InputNotFound(path.to_path_buf()).into());
            }
        }
        if let Some(path) = output.path() {
            if path.exists() {
                return Err(FakeGtError::OutputExists(path.to_path_buf()).into());
            }
        }

        let reader = utils::open_input(&input)
            .with_context(|| format!("Failed to open {}", self.vcf_in))?;
        let mut writer = utils::create_output(&output)
            .with_context(|| format!("Failed to create {}", self.vcf_out))?;

        let summary = add_fake_gt(reader, &mut writer, &self.sample)
            .with_context(|| format!("Failed to process {}", self.vcf_in))?;
        writer
            .finish()
            .with_context(|| format!("Failed to write {}", self.vcf_out))?;

        info!(
            "{} rows written ({} comment, {} header, {} variant)",
            summary.total(),
            summary.comment,
            summary.header,
            summary.data
        );
        Ok(())
    }
}
