//! MySQL keyword table.
//!
//! Keywords are matched case-insensitively (ASCII folding) against a single
//! table. Reserved keywords can never be used as bare identifiers; the
//! non-reserved ones can, so the scanner keeps their surface text on the
//! token for the grammar to fall back on.

/// Declares the [`Keyword`] enum together with its lookup and spelling
/// tables from one list, so the three can never drift apart.
macro_rules! define_keywords {
    (
        reserved { $($r:ident => $rs:literal,)* }
        unreserved { $($u:ident => $us:literal,)* }
    ) => {
        /// MySQL keywords.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum Keyword {
            $(#[doc = $rs] $r,)*
            $(#[doc = $us] $u,)*
        }

        impl Keyword {
            /// Every keyword, reserved ones first.
            pub const ALL: &'static [Self] = &[$(Self::$r,)* $(Self::$u,)*];

            /// Looks up a keyword, ignoring ASCII case.
            #[must_use]
            pub fn lookup(word: &str) -> Option<Self> {
                match word.to_ascii_uppercase().as_str() {
                    $($rs => Some(Self::$r),)*
                    $($us => Some(Self::$u),)*
                    _ => None,
                }
            }

            /// Returns the canonical (upper-case) spelling.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$r => $rs,)*
                    $(Self::$u => $us,)*
                }
            }

            /// Returns true if the keyword cannot be used as a bare identifier.
            #[must_use]
            pub const fn is_reserved(self) -> bool {
                matches!(self, $(Self::$r)|*)
            }
        }
    };
}

define_keywords! {
    reserved {
        Accessible => "ACCESSIBLE",
        Add => "ADD",
        All => "ALL",
        Alter => "ALTER",
        Analyze => "ANALYZE",
        And => "AND",
        As => "AS",
        Asc => "ASC",
        Asensitive => "ASENSITIVE",
        Before => "BEFORE",
        Between => "BETWEEN",
        Bigint => "BIGINT",
        Binary => "BINARY",
        Blob => "BLOB",
        Both => "BOTH",
        By => "BY",
        Call => "CALL",
        Cascade => "CASCADE",
        Case => "CASE",
        Change => "CHANGE",
        Char => "CHAR",
        Character => "CHARACTER",
        Check => "CHECK",
        Collate => "COLLATE",
        Column => "COLUMN",
        Condition => "CONDITION",
        Constraint => "CONSTRAINT",
        Continue => "CONTINUE",
        Convert => "CONVERT",
        Create => "CREATE",
        Cross => "CROSS",
        Cube => "CUBE",
        CumeDist => "CUME_DIST",
        CurrentDate => "CURRENT_DATE",
        CurrentTime => "CURRENT_TIME",
        CurrentTimestamp => "CURRENT_TIMESTAMP",
        CurrentUser => "CURRENT_USER",
        Cursor => "CURSOR",
        Database => "DATABASE",
        Databases => "DATABASES",
        DayHour => "DAY_HOUR",
        DayMicrosecond => "DAY_MICROSECOND",
        DayMinute => "DAY_MINUTE",
        DaySecond => "DAY_SECOND",
        Dec => "DEC",
        Decimal => "DECIMAL",
        Declare => "DECLARE",
        Default => "DEFAULT",
        Delayed => "DELAYED",
        Delete => "DELETE",
        DenseRank => "DENSE_RANK",
        Desc => "DESC",
        Describe => "DESCRIBE",
        Deterministic => "DETERMINISTIC",
        Distinct => "DISTINCT",
        Distinctrow => "DISTINCTROW",
        Div => "DIV",
        Double => "DOUBLE",
        Drop => "DROP",
        Dual => "DUAL",
        Each => "EACH",
        Else => "ELSE",
        Elseif => "ELSEIF",
        Empty => "EMPTY",
        Enclosed => "ENCLOSED",
        Escaped => "ESCAPED",
        Except => "EXCEPT",
        Exists => "EXISTS",
        Exit => "EXIT",
        Explain => "EXPLAIN",
        False => "FALSE",
        Fetch => "FETCH",
        FirstValue => "FIRST_VALUE",
        Float => "FLOAT",
        Float4 => "FLOAT4",
        Float8 => "FLOAT8",
        For => "FOR",
        Force => "FORCE",
        Foreign => "FOREIGN",
        From => "FROM",
        Fulltext => "FULLTEXT",
        Function => "FUNCTION",
        Generated => "GENERATED",
        Get => "GET",
        Grant => "GRANT",
        Group => "GROUP",
        Grouping => "GROUPING",
        Groups => "GROUPS",
        Having => "HAVING",
        HighPriority => "HIGH_PRIORITY",
        HourMicrosecond => "HOUR_MICROSECOND",
        HourMinute => "HOUR_MINUTE",
        HourSecond => "HOUR_SECOND",
        If => "IF",
        Ignore => "IGNORE",
        In => "IN",
        Index => "INDEX",
        Infile => "INFILE",
        Inner => "INNER",
        Inout => "INOUT",
        Insensitive => "INSENSITIVE",
        Insert => "INSERT",
        Int => "INT",
        Int1 => "INT1",
        Int2 => "INT2",
        Int3 => "INT3",
        Int4 => "INT4",
        Int8 => "INT8",
        Integer => "INTEGER",
        Intersect => "INTERSECT",
        Interval => "INTERVAL",
        Into => "INTO",
        IoAfterGtids => "IO_AFTER_GTIDS",
        IoBeforeGtids => "IO_BEFORE_GTIDS",
        Is => "IS",
        Iterate => "ITERATE",
        Join => "JOIN",
        JsonTable => "JSON_TABLE",
        Key => "KEY",
        Keys => "KEYS",
        Kill => "KILL",
        Lag => "LAG",
        LastValue => "LAST_VALUE",
        Lateral => "LATERAL",
        Lead => "LEAD",
        Leading => "LEADING",
        Leave => "LEAVE",
        Left => "LEFT",
        Like => "LIKE",
        Limit => "LIMIT",
        Linear => "LINEAR",
        Lines => "LINES",
        Load => "LOAD",
        Localtime => "LOCALTIME",
        Localtimestamp => "LOCALTIMESTAMP",
        Lock => "LOCK",
        Long => "LONG",
        Longblob => "LONGBLOB",
        Longtext => "LONGTEXT",
        Loop => "LOOP",
        LowPriority => "LOW_PRIORITY",
        MasterBind => "MASTER_BIND",
        MasterSslVerifyServerCert => "MASTER_SSL_VERIFY_SERVER_CERT",
        Match => "MATCH",
        Maxvalue => "MAXVALUE",
        Mediumblob => "MEDIUMBLOB",
        Mediumint => "MEDIUMINT",
        Mediumtext => "MEDIUMTEXT",
        Middleint => "MIDDLEINT",
        MinuteMicrosecond => "MINUTE_MICROSECOND",
        MinuteSecond => "MINUTE_SECOND",
        Mod => "MOD",
        Modifies => "MODIFIES",
        Natural => "NATURAL",
        Not => "NOT",
        NoWriteToBinlog => "NO_WRITE_TO_BINLOG",
        NthValue => "NTH_VALUE",
        Ntile => "NTILE",
        Null => "NULL",
        Numeric => "NUMERIC",
        Of => "OF",
        On => "ON",
        Optimize => "OPTIMIZE",
        OptimizerCosts => "OPTIMIZER_COSTS",
        Option => "OPTION",
        Optionally => "OPTIONALLY",
        Or => "OR",
        Order => "ORDER",
        Out => "OUT",
        Outer => "OUTER",
        Outfile => "OUTFILE",
        Over => "OVER",
        Partition => "PARTITION",
        PercentRank => "PERCENT_RANK",
        Precision => "PRECISION",
        Primary => "PRIMARY",
        Procedure => "PROCEDURE",
        Purge => "PURGE",
        Range => "RANGE",
        Rank => "RANK",
        Read => "READ",
        Reads => "READS",
        ReadWrite => "READ_WRITE",
        Real => "REAL",
        Recursive => "RECURSIVE",
        References => "REFERENCES",
        Regexp => "REGEXP",
        Release => "RELEASE",
        Rename => "RENAME",
        Repeat => "REPEAT",
        Replace => "REPLACE",
        Require => "REQUIRE",
        Resignal => "RESIGNAL",
        Restrict => "RESTRICT",
        Return => "RETURN",
        Revoke => "REVOKE",
        Right => "RIGHT",
        Rlike => "RLIKE",
        Row => "ROW",
        Rows => "ROWS",
        RowNumber => "ROW_NUMBER",
        Schema => "SCHEMA",
        Schemas => "SCHEMAS",
        SecondMicrosecond => "SECOND_MICROSECOND",
        Select => "SELECT",
        Sensitive => "SENSITIVE",
        Separator => "SEPARATOR",
        Set => "SET",
        Show => "SHOW",
        Signal => "SIGNAL",
        Smallint => "SMALLINT",
        Spatial => "SPATIAL",
        Specific => "SPECIFIC",
        Sql => "SQL",
        Sqlexception => "SQLEXCEPTION",
        Sqlstate => "SQLSTATE",
        Sqlwarning => "SQLWARNING",
        SqlBigResult => "SQL_BIG_RESULT",
        SqlCalcFoundRows => "SQL_CALC_FOUND_ROWS",
        SqlSmallResult => "SQL_SMALL_RESULT",
        Ssl => "SSL",
        Starting => "STARTING",
        Stored => "STORED",
        StraightJoin => "STRAIGHT_JOIN",
        System => "SYSTEM",
        Table => "TABLE",
        Terminated => "TERMINATED",
        Then => "THEN",
        Tinyblob => "TINYBLOB",
        Tinyint => "TINYINT",
        Tinytext => "TINYTEXT",
        To => "TO",
        Trailing => "TRAILING",
        Trigger => "TRIGGER",
        True => "TRUE",
        Undo => "UNDO",
        Union => "UNION",
        Unique => "UNIQUE",
        Unlock => "UNLOCK",
        Unsigned => "UNSIGNED",
        Update => "UPDATE",
        Usage => "USAGE",
        Use => "USE",
        Using => "USING",
        UtcDate => "UTC_DATE",
        UtcTime => "UTC_TIME",
        UtcTimestamp => "UTC_TIMESTAMP",
        Values => "VALUES",
        Varbinary => "VARBINARY",
        Varchar => "VARCHAR",
        Varcharacter => "VARCHARACTER",
        Varying => "VARYING",
        Virtual => "VIRTUAL",
        When => "WHEN",
        Where => "WHERE",
        While => "WHILE",
        Window => "WINDOW",
        With => "WITH",
        Write => "WRITE",
        Xor => "XOR",
        YearMonth => "YEAR_MONTH",
        Zerofill => "ZEROFILL",
    }
    unreserved {
        Action => "ACTION",
        Adddate => "ADDDATE",
        After => "AFTER",
        Against => "AGAINST",
        Aggregate => "AGGREGATE",
        Algorithm => "ALGORITHM",
        Always => "ALWAYS",
        Any => "ANY",
        Ascii => "ASCII",
        AutoIncrement => "AUTO_INCREMENT",
        Avg => "AVG",
        AvgRowLength => "AVG_ROW_LENGTH",
        Begin => "BEGIN",
        Binlog => "BINLOG",
        Bit => "BIT",
        BitAnd => "BIT_AND",
        BitOr => "BIT_OR",
        BitXor => "BIT_XOR",
        Block => "BLOCK",
        Bool => "BOOL",
        Boolean => "BOOLEAN",
        Btree => "BTREE",
        Byte => "BYTE",
        Cache => "CACHE",
        Cascaded => "CASCADED",
        Cast => "CAST",
        Chain => "CHAIN",
        Changed => "CHANGED",
        Charset => "CHARSET",
        Checksum => "CHECKSUM",
        Cipher => "CIPHER",
        Client => "CLIENT",
        Close => "CLOSE",
        Coalesce => "COALESCE",
        Code => "CODE",
        Collation => "COLLATION",
        Columns => "COLUMNS",
        ColumnFormat => "COLUMN_FORMAT",
        Comment => "COMMENT",
        Commit => "COMMIT",
        Committed => "COMMITTED",
        Compact => "COMPACT",
        Compressed => "COMPRESSED",
        Compression => "COMPRESSION",
        Concurrent => "CONCURRENT",
        Connection => "CONNECTION",
        Consistent => "CONSISTENT",
        Contains => "CONTAINS",
        Context => "CONTEXT",
        Count => "COUNT",
        Cpu => "CPU",
        Csv => "CSV",
        Curdate => "CURDATE",
        Current => "CURRENT",
        Curtime => "CURTIME",
        Data => "DATA",
        Date => "DATE",
        Datetime => "DATETIME",
        DateAdd => "DATE_ADD",
        DateSub => "DATE_SUB",
        Day => "DAY",
        Deallocate => "DEALLOCATE",
        Definer => "DEFINER",
        DelayKeyWrite => "DELAY_KEY_WRITE",
        Directory => "DIRECTORY",
        Disable => "DISABLE",
        Discard => "DISCARD",
        Disk => "DISK",
        Do => "DO",
        Duplicate => "DUPLICATE",
        Dynamic => "DYNAMIC",
        Enable => "ENABLE",
        Encryption => "ENCRYPTION",
        End => "END",
        Engine => "ENGINE",
        Engines => "ENGINES",
        Enum => "ENUM",
        Error => "ERROR",
        Errors => "ERRORS",
        Escape => "ESCAPE",
        Event => "EVENT",
        Events => "EVENTS",
        Every => "EVERY",
        Exchange => "EXCHANGE",
        Execute => "EXECUTE",
        Expansion => "EXPANSION",
        Expire => "EXPIRE",
        Extended => "EXTENDED",
        Extract => "EXTRACT",
        Faults => "FAULTS",
        Fields => "FIELDS",
        File => "FILE",
        First => "FIRST",
        Fixed => "FIXED",
        Flush => "FLUSH",
        Following => "FOLLOWING",
        Format => "FORMAT",
        Found => "FOUND",
        Full => "FULL",
        General => "GENERAL",
        Geometry => "GEOMETRY",
        Global => "GLOBAL",
        Grants => "GRANTS",
        GroupConcat => "GROUP_CONCAT",
        Handler => "HANDLER",
        Hash => "HASH",
        Help => "HELP",
        Host => "HOST",
        Hosts => "HOSTS",
        Hour => "HOUR",
        Identified => "IDENTIFIED",
        Import => "IMPORT",
        Indexes => "INDEXES",
        Invisible => "INVISIBLE",
        Invoker => "INVOKER",
        Isolation => "ISOLATION",
        Issuer => "ISSUER",
        Json => "JSON",
        KeyBlockSize => "KEY_BLOCK_SIZE",
        Language => "LANGUAGE",
        Last => "LAST",
        Leaves => "LEAVES",
        Less => "LESS",
        Level => "LEVEL",
        List => "LIST",
        Local => "LOCAL",
        Locked => "LOCKED",
        Logs => "LOGS",
        Master => "MASTER",
        Max => "MAX",
        MaxRows => "MAX_ROWS",
        Memory => "MEMORY",
        Merge => "MERGE",
        Microsecond => "MICROSECOND",
        Min => "MIN",
        Minute => "MINUTE",
        MinRows => "MIN_ROWS",
        Mode => "MODE",
        Modify => "MODIFY",
        Month => "MONTH",
        Name => "NAME",
        Names => "NAMES",
        National => "NATIONAL",
        Nchar => "NCHAR",
        Never => "NEVER",
        Next => "NEXT",
        No => "NO",
        Nodegroup => "NODEGROUP",
        None => "NONE",
        Now => "NOW",
        Nowait => "NOWAIT",
        Nulls => "NULLS",
        Offset => "OFFSET",
        Only => "ONLY",
        Open => "OPEN",
        Options => "OPTIONS",
        Owner => "OWNER",
        PackKeys => "PACK_KEYS",
        Page => "PAGE",
        Parser => "PARSER",
        Partial => "PARTIAL",
        Partitioning => "PARTITIONING",
        Partitions => "PARTITIONS",
        Password => "PASSWORD",
        Plugins => "PLUGINS",
        Port => "PORT",
        Position => "POSITION",
        Preceding => "PRECEDING",
        Prepare => "PREPARE",
        Preserve => "PRESERVE",
        Prev => "PREV",
        Privileges => "PRIVILEGES",
        Process => "PROCESS",
        Processlist => "PROCESSLIST",
        Profile => "PROFILE",
        Profiles => "PROFILES",
        Proxy => "PROXY",
        Quarter => "QUARTER",
        Query => "QUERY",
        Quick => "QUICK",
        Rebuild => "REBUILD",
        Recover => "RECOVER",
        Redundant => "REDUNDANT",
        Reload => "RELOAD",
        Remove => "REMOVE",
        Reorganize => "REORGANIZE",
        Repair => "REPAIR",
        Repeatable => "REPEATABLE",
        Replication => "REPLICATION",
        Reset => "RESET",
        Restore => "RESTORE",
        Resume => "RESUME",
        Returns => "RETURNS",
        Reuse => "REUSE",
        Reverse => "REVERSE",
        Role => "ROLE",
        Rollback => "ROLLBACK",
        Rollup => "ROLLUP",
        Routine => "ROUTINE",
        RowCount => "ROW_COUNT",
        RowFormat => "ROW_FORMAT",
        Savepoint => "SAVEPOINT",
        Schedule => "SCHEDULE",
        Second => "SECOND",
        Security => "SECURITY",
        Serial => "SERIAL",
        Serializable => "SERIALIZABLE",
        Server => "SERVER",
        Session => "SESSION",
        Share => "SHARE",
        Shutdown => "SHUTDOWN",
        Signed => "SIGNED",
        Simple => "SIMPLE",
        Skip => "SKIP",
        Slave => "SLAVE",
        Slow => "SLOW",
        Snapshot => "SNAPSHOT",
        Socket => "SOCKET",
        Some => "SOME",
        Sounds => "SOUNDS",
        Source => "SOURCE",
        SqlBufferResult => "SQL_BUFFER_RESULT",
        SqlCache => "SQL_CACHE",
        SqlNoCache => "SQL_NO_CACHE",
        SqlThread => "SQL_THREAD",
        Start => "START",
        Starts => "STARTS",
        StatsAutoRecalc => "STATS_AUTO_RECALC",
        StatsPersistent => "STATS_PERSISTENT",
        StatsSamplePages => "STATS_SAMPLE_PAGES",
        Status => "STATUS",
        Std => "STD",
        Stddev => "STDDEV",
        StddevPop => "STDDEV_POP",
        StddevSamp => "STDDEV_SAMP",
        Stop => "STOP",
        Storage => "STORAGE",
        String => "STRING",
        Subdate => "SUBDATE",
        Subject => "SUBJECT",
        Subpartition => "SUBPARTITION",
        Subpartitions => "SUBPARTITIONS",
        Substr => "SUBSTR",
        Substring => "SUBSTRING",
        Sum => "SUM",
        Super => "SUPER",
        Suspend => "SUSPEND",
        Swaps => "SWAPS",
        Switches => "SWITCHES",
        Sysdate => "SYSDATE",
        Tables => "TABLES",
        Tablespace => "TABLESPACE",
        TableChecksum => "TABLE_CHECKSUM",
        Temporary => "TEMPORARY",
        Temptable => "TEMPTABLE",
        Text => "TEXT",
        Than => "THAN",
        Time => "TIME",
        Timestamp => "TIMESTAMP",
        Timestampadd => "TIMESTAMPADD",
        Timestampdiff => "TIMESTAMPDIFF",
        Transaction => "TRANSACTION",
        Triggers => "TRIGGERS",
        Trim => "TRIM",
        Truncate => "TRUNCATE",
        Type => "TYPE",
        Types => "TYPES",
        Unbounded => "UNBOUNDED",
        Uncommitted => "UNCOMMITTED",
        Undefined => "UNDEFINED",
        Unicode => "UNICODE",
        Unknown => "UNKNOWN",
        Until => "UNTIL",
        Upgrade => "UPGRADE",
        User => "USER",
        UserResources => "USER_RESOURCES",
        Validation => "VALIDATION",
        Value => "VALUE",
        Variables => "VARIABLES",
        Variance => "VARIANCE",
        VarPop => "VAR_POP",
        VarSamp => "VAR_SAMP",
        View => "VIEW",
        Visible => "VISIBLE",
        Wait => "WAIT",
        Warnings => "WARNINGS",
        Week => "WEEK",
        WeightString => "WEIGHT_STRING",
        Without => "WITHOUT",
        Work => "WORK",
        Wrapper => "WRAPPER",
        X509 => "X509",
        Xa => "XA",
        Xml => "XML",
        Year => "YEAR",
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(Keyword::lookup("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::lookup("select"), Some(Keyword::Select));
        assert_eq!(Keyword::lookup("SeLeCt"), Some(Keyword::Select));
        assert_eq!(Keyword::lookup("not_a_keyword"), None);
    }

    #[test]
    fn test_multi_word_spellings() {
        assert_eq!(
            Keyword::lookup("sql_calc_found_rows"),
            Some(Keyword::SqlCalcFoundRows)
        );
        assert_eq!(Keyword::lookup("auto_increment"), Some(Keyword::AutoIncrement));
        assert_eq!(Keyword::AutoIncrement.as_str(), "AUTO_INCREMENT");
    }

    #[test]
    fn test_reserved_split() {
        assert!(Keyword::Select.is_reserved());
        assert!(Keyword::Where.is_reserved());
        assert!(!Keyword::Begin.is_reserved());
        assert!(!Keyword::Comment.is_reserved());
        assert!(!Keyword::Now.is_reserved());
    }

    #[test]
    fn test_table_is_disjoint_and_round_trips() {
        let mut seen = HashSet::new();
        for kw in Keyword::ALL {
            assert!(seen.insert(kw.as_str()), "duplicate spelling {kw}");
            assert_eq!(Keyword::lookup(kw.as_str()), Some(*kw));
            assert_eq!(
                Keyword::lookup(&kw.as_str().to_ascii_lowercase()),
                Some(*kw)
            );
        }
        assert!(Keyword::ALL.len() >= 400);
    }

    #[test]
    fn test_reserved_come_first() {
        let first_unreserved = Keyword::ALL
            .iter()
            .position(|kw| !kw.is_reserved())
            .unwrap();
        assert!(Keyword::ALL[first_unreserved..]
            .iter()
            .all(|kw| !kw.is_reserved()));
    }
}
