//! CSV reports used across tests.

/// Producer/consumer report carrying every pair of the role catalog
pub const PRODUCER_CONSUMER_CSV: &str = "\
FullFunction,DuckDBProducer-AceroConsumer,DuckDBProducer-DuckDBConsumer,IbisProducer-AceroConsumer,IbisProducer-DuckDBConsumer,IsthmusProducer-DuckDBConsumer,IsthmusProducer-AceroConsumer
substrait.functions_string.concat,False,True,False,True,True,True
substrait.functions_arithmetic.subtract,True,True,False,True,True,False
substrait.functions_comparison.equal,True,True,True,True,False,False
substrait.functions_arithmetic.add,True,True,True,True,True,False
";

/// Producer-only report carrying every producer of the style catalog
pub const PRODUCER_CSV: &str = "\
FullFunction,DuckDBProducer,IbisProducer,IsthmusProducer
substrait.functions_string.lower,True,False,True
substrait.functions_arithmetic.multiply,True,False,False
substrait.functions_arithmetic.add,True,True,True
";
